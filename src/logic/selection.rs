use crate::state::AppState;

/// What: Move the grid cursor by `delta` cards.
///
/// Inputs:
/// - `app`: Mutable application state (view list and cursor)
/// - `delta`: Signed offset; a row step passes the column count
///
/// Output:
/// - Cursor clamped to `0..view.len()`; unchanged when the view is empty.
pub fn move_cursor(app: &mut AppState, delta: isize) {
    if app.view.is_empty() {
        app.cursor = 0;
        return;
    }
    let last = app.view.len() - 1;
    app.cursor = app.cursor.saturating_add_signed(delta).min(last);
}

/// What: Toggle selection of the card under the grid cursor.
///
/// Output:
/// - `Some(id)` of the toggled product, `None` when the view is empty.
pub fn toggle_at_cursor(app: &mut AppState) -> Option<u64> {
    let id = app.current()?.id;
    toggle_product(app, id);
    Some(id)
}

/// What: Toggle selection of one product id and log the new state.
///
/// Details:
/// - The id does not need to be in the current view; selection is kept
///   independently of filtering.
pub fn toggle_product(app: &mut AppState, id: u64) {
    app.selection.toggle(id);
    tracing::debug!(
        id,
        selected = app.selection.contains(id),
        total = app.selection.len(),
        "toggled product selection"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CatalogOutcome, FilterAction, Product};

    fn app_with(n: u32) -> AppState {
        let mut app = AppState::default();
        let products = (1..=n)
            .map(|i| Product {
                id: u64::from(i),
                title: format!("Item {i}"),
                category: "beauty".into(),
                price: f64::from(i),
                discount_percentage: 0.0,
                rating: 0.0,
                thumbnail: String::new(),
            })
            .collect();
        app.apply_catalog_outcome(CatalogOutcome::Loaded(products));
        app
    }

    #[test]
    /// What: Cursor moves clamp at both ends of the view
    fn cursor_clamps() {
        let mut app = app_with(5);
        move_cursor(&mut app, -3);
        assert_eq!(app.cursor, 0);
        move_cursor(&mut app, 3);
        assert_eq!(app.cursor, 3);
        move_cursor(&mut app, 10);
        assert_eq!(app.cursor, 4);
    }

    #[test]
    /// What: Toggling at the cursor selects that card; an empty view toggles nothing
    fn toggle_at_cursor_selects_current_card() {
        let mut app = app_with(3);
        move_cursor(&mut app, 1);
        assert_eq!(toggle_at_cursor(&mut app), Some(2));
        assert!(app.selection.contains(2));

        app.dispatch(FilterAction::SetSearch("nothing matches".into()));
        assert_eq!(toggle_at_cursor(&mut app), None);
        assert!(app.selection.contains(2));
    }
}
