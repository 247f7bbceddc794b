use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus, SortOrder};
use crate::theme::{Theme, theme};

/// What: Render one text input with placeholder and focus styling.
///
/// Inputs:
/// - `value`: Current text; the placeholder shows when empty
/// - `focused`: Whether the input owns the cursor
///
/// Output:
/// - Draws the input and, when focused, places the terminal cursor after the text.
fn render_input(
    f: &mut Frame,
    th: &Theme,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let line = if value.is_empty() {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ))
    };
    let border = if focused { th.mauve } else { th.surface1 };
    let input = Paragraph::new(line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    title.to_string(),
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(input, area);

    if focused {
        let right = area.x + area.width.saturating_sub(2);
        let typed = u16::try_from(unicode_width::UnicodeWidthStr::width(value)).unwrap_or(u16::MAX);
        let x = (area.x + 1).saturating_add(typed).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// What: Render the controls row: search, min/max price and the sort control.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (records control rectangles)
/// - `area`: Row rectangle (3 rows)
pub fn render_controls(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(24),
        ])
        .split(area);

    render_input(
        f,
        &th,
        cols[0],
        "Search",
        &app.criteria.search_text,
        "Search products...",
        app.focus == Focus::Search,
    );
    render_input(
        f,
        &th,
        cols[1],
        "Min",
        &app.criteria.min_price,
        "Min Price",
        app.focus == Focus::MinPrice,
    );
    render_input(
        f,
        &th,
        cols[2],
        "Max",
        &app.criteria.max_price,
        "Max Price",
        app.focus == Focus::MaxPrice,
    );

    let order = app.criteria.sort_order;
    let label_style = if order == SortOrder::None {
        Style::default().fg(th.subtext0)
    } else {
        Style::default()
            .fg(th.crust)
            .bg(th.lavender)
            .add_modifier(Modifier::BOLD)
    };
    let sort = Paragraph::new(Line::from(vec![
        Span::styled(order.label(), label_style),
        Span::styled(" ▾", Style::default().fg(th.overlay1)),
    ]))
    .style(Style::default().bg(th.base))
    .block(
        Block::default()
            .title(Span::styled("Sort (F3)", Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(sort, cols[3]);

    app.hit.search = Some(cols[0]);
    app.hit.min_price = Some(cols[1]);
    app.hit.max_price = Some(cols[2]);
    app.hit.sort = Some(cols[3]);
}
