use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Category};
use crate::theme::theme;

/// Brand shown at the left of the navbar.
pub const BRAND: &str = "Raghad's market";

/// What: Render the navbar: brand, category buttons and the selection count.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (records category button rectangles)
/// - `area`: Navbar rectangle (3 rows)
///
/// Details:
/// - Buttons are laid out left to right after the brand; the active category
///   is drawn as a highlighted chip. Each button's rectangle is recorded for
///   mouse hit-testing.
pub fn render_navbar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.hit.categories.clear();
    let mut spans: Vec<Span> = vec![
        Span::styled(
            BRAND,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    let mut x = inner.x + u16::try_from(BRAND.len() + 3).unwrap_or(u16::MAX);
    for cat in Category::buttons() {
        let label = format!(" {} ", cat.label());
        let w = u16::try_from(label.len()).unwrap_or(u16::MAX);
        let active = cat == app.criteria.category;
        let style = if active {
            Style::default()
                .fg(th.crust)
                .bg(th.lavender)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD)
        };
        if x.saturating_add(w) <= inner.x + inner.width {
            app.hit.categories.push((
                cat,
                Rect {
                    x,
                    y: inner.y,
                    width: w,
                    height: 1,
                },
            ));
        }
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x = x.saturating_add(w + 1);
    }

    let selected = app.selection.len();
    if selected > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("Selected: {selected}"),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        inner,
    );
}
