use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::{move_cursor, toggle_at_cursor};
use crate::state::{AppState, FilterAction, Focus, PriceField};

/// What: Route typed characters and Backspace to the focused input.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when the key was consumed by an input.
fn handle_input_key(ke: &KeyEvent, app: &mut AppState) -> bool {
    let field = match app.focus {
        Focus::MinPrice => Some(PriceField::Min),
        Focus::MaxPrice => Some(PriceField::Max),
        Focus::Search | Focus::Grid => None,
    };
    let action = match (ke.code, app.focus, field) {
        (KeyCode::Char(ch), Focus::Search, _) => FilterAction::PushSearchChar(ch),
        (KeyCode::Backspace, Focus::Search, _) => FilterAction::PopSearchChar,
        (KeyCode::Char(ch), _, Some(f)) => FilterAction::PushPriceChar(f, ch),
        (KeyCode::Backspace, _, Some(f)) => FilterAction::PopPriceChar(f),
        _ => return false,
    };
    app.dispatch(action);
    true
}

/// What: Handle keys while the card grid has focus.
///
/// Details:
/// - Left/Right move by one card, Up/Down by one row, Home/End jump to the ends.
/// - Space or Enter toggles the card under the cursor.
fn handle_grid_key(ke: &KeyEvent, app: &mut AppState) {
    let row = isize::try_from(app.grid_columns.max(1)).unwrap_or(1);
    match ke.code {
        KeyCode::Left | KeyCode::Char('h') => move_cursor(app, -1),
        KeyCode::Right | KeyCode::Char('l') => move_cursor(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, -row),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, row),
        KeyCode::Home => move_cursor(app, isize::MIN / 2),
        KeyCode::End => move_cursor(app, isize::MAX / 2),
        KeyCode::Char(' ') | KeyCode::Enter => {
            toggle_at_cursor(app);
        }
        _ => {}
    }
}

/// What: Handle one key press.
///
/// Inputs:
/// - `ke`: Key event (press kind already filtered by the caller)
/// - `app`: Mutable application state
///
/// Output:
/// - `true` to request exit; otherwise `false`.
///
/// Details:
/// - Global: `Esc`/`Ctrl+C` quit, `Tab`/`Shift+Tab` move focus, `F2` cycles
///   the category, `F3` cycles the sort order.
/// - `q` quits only from the grid so it can still be typed into the search box.
/// - Arrow keys from an input jump into the grid.
pub fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    if ke.code == KeyCode::Esc
        || (ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL))
    {
        return true;
    }
    match ke.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return false;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return false;
        }
        KeyCode::F(2) => {
            app.dispatch(FilterAction::CycleCategory);
            return false;
        }
        KeyCode::F(3) => {
            app.dispatch(FilterAction::CycleSort);
            return false;
        }
        _ => {}
    }

    if app.focus == Focus::Grid {
        if ke.code == KeyCode::Char('q') {
            return true;
        }
        handle_grid_key(&ke, app);
        return false;
    }

    if ke.modifiers.contains(KeyModifiers::CONTROL) || ke.modifiers.contains(KeyModifiers::ALT) {
        return false;
    }
    if handle_input_key(&ke, app) {
        return false;
    }
    if matches!(ke.code, KeyCode::Down | KeyCode::Up | KeyCode::Enter) {
        app.focus = Focus::Grid;
    }
    false
}
