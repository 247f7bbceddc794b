use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::logic::{move_cursor, toggle_product};
use crate::state::{AppState, FilterAction, Focus};

/// Whether the point lies inside `r`.
fn hit(r: Rect, x: u16, y: u16) -> bool {
    r.contains(Position::new(x, y))
}

/// What: Handle one mouse event against the rectangles recorded by the last render.
///
/// Inputs:
/// - `m`: Mouse event with position and kind
/// - `app`: Mutable application state
///
/// Details:
/// - Left click on a category button selects it; on the sort control cycles
///   the order; on an input focuses it; on a card moves the cursor there and
///   toggles its selection.
/// - The scroll wheel moves the grid cursor by one row.
pub fn handle_mouse(m: MouseEvent, app: &mut AppState) {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::Down(MouseButton::Left) => {}
        MouseEventKind::ScrollDown => {
            let row = isize::try_from(app.grid_columns.max(1)).unwrap_or(1);
            move_cursor(app, row);
            return;
        }
        MouseEventKind::ScrollUp => {
            let row = isize::try_from(app.grid_columns.max(1)).unwrap_or(1);
            move_cursor(app, -row);
            return;
        }
        _ => return,
    }

    if let Some(cat) = app
        .hit
        .categories
        .iter()
        .find(|(_, r)| hit(*r, mx, my))
        .map(|(c, _)| c.clone())
    {
        app.dispatch(FilterAction::SetCategory(cat));
        return;
    }
    if app.hit.sort.is_some_and(|r| hit(r, mx, my)) {
        app.dispatch(FilterAction::CycleSort);
        return;
    }
    let focus_targets = [
        (app.hit.search, Focus::Search),
        (app.hit.min_price, Focus::MinPrice),
        (app.hit.max_price, Focus::MaxPrice),
    ];
    if let Some(focus) = focus_targets
        .iter()
        .find(|(r, _)| r.is_some_and(|r| hit(r, mx, my)))
        .map(|(_, f)| *f)
    {
        app.focus = focus;
        return;
    }
    if let Some(&(id, idx, _)) = app.hit.cards.iter().find(|(_, _, r)| hit(*r, mx, my)) {
        app.focus = Focus::Grid;
        app.cursor = idx;
        toggle_product(app, id);
    }
}
