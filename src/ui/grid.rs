use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus, LoadStatus, Product};
use crate::theme::{Theme, theme};
use crate::util::{format_amount, truncate_to_width};

/// Preferred card width in columns; the grid fits as many as the area allows.
pub const CARD_WIDTH: u16 = 34;
/// Card height: borders plus four content lines.
pub const CARD_HEIGHT: u16 = 6;

/// What: Number of card columns for an area width.
///
/// Output:
/// - At least 1, otherwise `width / CARD_WIDTH`.
pub fn columns_for_width(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// What: Keep the cursor row inside the visible window.
///
/// Inputs:
/// - `scroll`: Current first visible row
/// - `cursor_row`: Row holding the cursor
/// - `visible_rows`: Rows that fit the area (at least 1)
///
/// Output:
/// - Adjusted first visible row.
pub fn scroll_to_cursor(scroll: usize, cursor_row: usize, visible_rows: usize) -> usize {
    let visible = visible_rows.max(1);
    if cursor_row < scroll {
        cursor_row
    } else if cursor_row >= scroll + visible {
        cursor_row + 1 - visible
    } else {
        scroll
    }
}

/// Build the content lines of one card.
fn card_lines(th: &Theme, p: &Product, width: usize) -> Vec<Line<'static>> {
    let label = Style::default()
        .fg(th.subtext0)
        .add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![
            Span::styled("Price: ", label),
            Span::styled(
                format!("${}", format_amount(p.price)),
                Style::default().fg(th.green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Discount: ", label),
            Span::styled(
                format!("{}%", format_amount(p.discount_percentage)),
                Style::default().fg(th.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("Rating: ", label),
            Span::styled(format_amount(p.rating), Style::default().fg(th.yellow)),
        ]),
        Line::from(Span::styled(
            truncate_to_width(&p.thumbnail, width),
            Style::default().fg(th.overlay1),
        )),
    ]
}

/// What: Render the status banner and the card grid.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (scroll offset, column count, card rectangles)
/// - `area`: Grid rectangle
///
/// Details:
/// - While loading, a one-line indicator is drawn above the grid; after a
///   failure the error message takes that line. The grid itself always renders
///   the view list, so a failed load shows zero cards.
/// - Selected cards get a red border; the cursor card gets a thick border.
pub fn render_grid(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    app.hit.cards.clear();

    let mut grid_area = area;
    let banner = match &app.load_status {
        LoadStatus::Loading => Some(Span::styled(
            "Loading products…",
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        )),
        LoadStatus::Error(msg) => Some(Span::styled(
            msg.clone(),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        LoadStatus::Idle | LoadStatus::Loaded => None,
    };
    if let Some(span) = banner
        && area.height > 0
    {
        let line_area = Rect { height: 1, ..area };
        f.render_widget(
            Paragraph::new(Line::from(span).centered()).style(Style::default().bg(th.base)),
            line_area,
        );
        grid_area = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };
    }

    let cols = columns_for_width(grid_area.width);
    app.grid_columns = cols;
    if app.view.is_empty() || grid_area.height < CARD_HEIGHT {
        return;
    }
    let card_w = grid_area.width / u16::try_from(cols).unwrap_or(1);
    let visible_rows = usize::from(grid_area.height / CARD_HEIGHT);
    app.grid_scroll = scroll_to_cursor(app.grid_scroll, app.cursor / cols, visible_rows);

    let start = app.grid_scroll * cols;
    let end = (start + visible_rows * cols).min(app.view.len());
    let grid_focused = app.focus == Focus::Grid;
    for (offset, idx) in (start..end).enumerate() {
        let p = &app.view[idx];
        let row = u16::try_from(offset / cols).unwrap_or(0);
        let col = u16::try_from(offset % cols).unwrap_or(0);
        let rect = Rect {
            x: grid_area.x + col * card_w,
            y: grid_area.y + row * CARD_HEIGHT,
            width: card_w,
            height: CARD_HEIGHT,
        };
        let selected = app.selection.contains(p.id);
        let is_cursor = grid_focused && idx == app.cursor;
        let border_color = if selected {
            th.red
        } else if is_cursor {
            th.sapphire
        } else {
            th.surface1
        };
        let inner_w = usize::from(card_w.saturating_sub(2));
        let block = Block::default()
            .title(Span::styled(
                truncate_to_width(&p.title, inner_w),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(if is_cursor {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(Style::default().fg(border_color));
        let card = Paragraph::new(card_lines(&th, p, inner_w))
            .style(Style::default().bg(th.base))
            .block(block);
        f.render_widget(card, rect);
        app.hit.cards.push((p.id, idx, rect));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Column count follows width and never drops to zero
    fn columns_for_width_cases() {
        assert_eq!(columns_for_width(10), 1);
        assert_eq!(columns_for_width(CARD_WIDTH * 3 + 5), 3);
    }

    #[test]
    /// What: Scrolling keeps the cursor row visible with minimal movement
    fn scroll_to_cursor_cases() {
        assert_eq!(scroll_to_cursor(0, 1, 3), 0);
        assert_eq!(scroll_to_cursor(0, 5, 3), 3);
        assert_eq!(scroll_to_cursor(4, 2, 3), 2);
        assert_eq!(scroll_to_cursor(0, 2, 0), 2);
    }
}
