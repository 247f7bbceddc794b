//! Event handling layer for the storefront TUI.
//!
//! Key presses go to `keys`, mouse events to `mouse`; both only mutate
//! [`AppState`] through the reducer and selection helpers.

use crossterm::event::{Event as CEvent, KeyEventKind};

use crate::state::AppState;

mod keys;
mod mouse;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            keys::handle_key(ke, app)
        }
        CEvent::Mouse(m) => {
            mouse::handle_mouse(m, app);
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{
        Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::layout::Rect;

    use super::handle_event;
    use crate::state::{AppState, CatalogOutcome, Category, Focus, Product, SortOrder};

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(x: u16, y: u16) -> CEvent {
        CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn loaded_app() -> AppState {
        let mut app = AppState::default();
        let products = [
            (1, "Red Lipstick", "beauty", 10.0),
            (2, "Blue Perfume", "fragrances", 50.0),
        ]
        .into_iter()
            .map(|(id, title, category, price)| Product {
                id,
                title: title.into(),
                category: category.into(),
                price,
                discount_percentage: 0.0,
                rating: 0.0,
                thumbnail: String::new(),
            })
            .collect();
        app.apply_catalog_outcome(CatalogOutcome::Loaded(products));
        app
    }

    #[test]
    /// What: Typing edits the focused input and filters the view
    ///
    /// - Input: "lip" in search; Tab; "20" into Min Price with a rejected letter
    /// - Output: View narrows accordingly; focus moves in tab order
    fn typing_filters_view() {
        let mut app = loaded_app();
        for ch in "lip".chars() {
            assert!(!handle_event(key(KeyCode::Char(ch)), &mut app));
        }
        assert_eq!(app.view.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
        for _ in 0..3 {
            handle_event(key(KeyCode::Backspace), &mut app);
        }
        handle_event(key(KeyCode::Tab), &mut app);
        assert_eq!(app.focus, Focus::MinPrice);
        for ch in "2x0".chars() {
            handle_event(key(KeyCode::Char(ch)), &mut app);
        }
        assert_eq!(app.criteria.min_price, "20");
        assert_eq!(app.view.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    /// What: `q` is text in the search box but quits from the grid; Esc always quits
    fn quit_keys() {
        let mut app = loaded_app();
        assert!(!handle_event(key(KeyCode::Char('q')), &mut app));
        assert_eq!(app.criteria.search_text, "q");
        app.focus = Focus::Grid;
        assert!(handle_event(key(KeyCode::Char('q')), &mut app));
        assert!(handle_event(key(KeyCode::Esc), &mut app));
    }

    #[test]
    /// What: Grid keys move the cursor and toggle selection; F2/F3 cycle filters
    fn grid_keys_and_function_keys() {
        let mut app = loaded_app();
        handle_event(key(KeyCode::Down), &mut app);
        assert_eq!(app.focus, Focus::Grid);
        handle_event(key(KeyCode::Right), &mut app);
        handle_event(key(KeyCode::Char(' ')), &mut app);
        assert!(app.selection.contains(2));
        handle_event(key(KeyCode::Enter), &mut app);
        assert!(!app.selection.contains(2));

        handle_event(key(KeyCode::F(3)), &mut app);
        assert_eq!(app.criteria.sort_order, SortOrder::LowToHigh);
        handle_event(key(KeyCode::F(2)), &mut app);
        assert_eq!(app.criteria.category, Category::Named("beauty".into()));
        assert_eq!(app.view.len(), 1);
    }

    #[test]
    /// What: Clicks hit recorded rectangles for categories, sort and cards
    fn mouse_clicks_use_hit_areas() {
        let mut app = loaded_app();
        app.hit.categories = vec![(
            Category::Named("fragrances".into()),
            Rect::new(10, 1, 12, 1),
        )];
        app.hit.sort = Some(Rect::new(60, 3, 20, 3));
        handle_event(click(12, 1), &mut app);
        assert_eq!(app.criteria.category, Category::Named("fragrances".into()));
        handle_event(click(61, 4), &mut app);
        assert_eq!(app.criteria.sort_order, SortOrder::LowToHigh);

        app.hit.cards = vec![(2, 0, Rect::new(0, 6, 30, 6))];
        handle_event(click(5, 8), &mut app);
        assert!(app.selection.contains(2));
        assert_eq!(app.focus, Focus::Grid);
        handle_event(click(5, 8), &mut app);
        assert!(!app.selection.contains(2));
    }
}
