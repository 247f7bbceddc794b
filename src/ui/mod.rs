//! Terminal rendering: navbar, controls row and the card grid.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod controls;
pub mod grid;
mod navbar;

pub use navbar::BRAND;

/// What: Draw the whole screen for the current state.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state; hit-test rectangles are refreshed
///
/// Details:
/// - Layout top to bottom: navbar (3 rows), controls (3 rows), grid (rest).
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    navbar::render_navbar(f, app, chunks[0]);
    controls::render_controls(f, app, chunks[1]);
    grid::render_grid(f, app, chunks[2]);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::state::{CatalogOutcome, Product};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.into(),
            category: "beauty".into(),
            price,
            discount_percentage: 12.5,
            rating: 4.2,
            thumbnail: "https://cdn.example/t.png".into(),
        }
    }

    #[test]
    /// What: Loaded catalog renders one card per view item with its fields
    ///
    /// - Input: Two products on a 100x30 terminal
    /// - Output: Brand, titles, price and discount text visible; two card rects recorded
    fn renders_cards_for_view() {
        let mut app = AppState::default();
        app.apply_catalog_outcome(CatalogOutcome::Loaded(vec![
            product(1, "Red Lipstick", 10.0),
            product(2, "Blue Perfume", 50.0),
        ]));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        terminal.draw(|f| ui(f, &mut app)).expect("draw");
        let text = screen_text(&terminal);
        assert!(text.contains(BRAND));
        assert!(text.contains("Red Lipstick"));
        assert!(text.contains("Blue Perfume"));
        assert!(text.contains("Price: $50"));
        assert!(text.contains("Discount: 12.5%"));
        assert!(text.contains("Search products..."));
        assert_eq!(app.hit.cards.len(), 2);
        assert_eq!(app.hit.categories.len(), 5);
        assert!(app.hit.sort.is_some());
    }

    #[test]
    /// What: A failed load shows the message and zero cards
    fn renders_error_without_cards() {
        let mut app = AppState::default();
        app.apply_catalog_outcome(CatalogOutcome::Failed(
            crate::sources::LOAD_ERROR_MESSAGE.to_string(),
        ));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        terminal.draw(|f| ui(f, &mut app)).expect("draw");
        let text = screen_text(&terminal);
        assert!(text.contains("Error fetching products"));
        assert!(app.hit.cards.is_empty());
    }

    #[test]
    /// What: Tiny terminals render without panicking
    fn renders_on_tiny_terminal() {
        let mut app = AppState::default();
        app.apply_catalog_outcome(CatalogOutcome::Loaded(vec![product(1, "A", 1.0)]));
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).expect("terminal");
        terminal.draw(|f| ui(f, &mut app)).expect("draw");
    }
}
