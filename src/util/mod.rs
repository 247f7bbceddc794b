//! Small formatting helpers shared by the UI, the CLI list mode and logging.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Format a number the way the storefront prints prices and percentages.
///
/// Inputs:
/// - `v`: Value to print
///
/// Output:
/// - Shortest form without trailing zeros: `10` for 10.0, `9.99` for 9.99.
///
/// Details:
/// - Values are rounded to two decimals first so float noise never shows.
pub fn format_amount(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// What: Truncate `s` to at most `max` terminal columns, appending `…` when cut.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Column budget
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix plus `…` within `max` columns.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// What: Format the current local time for log lines.
///
/// Output:
/// - `YYYY-MM-DD-T HH:MM:SS`
pub fn log_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d-T %H:%M:%S")
        .to_string()
}
