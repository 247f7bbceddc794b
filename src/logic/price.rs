/// What: Parse the raw text of a price input into a bound.
///
/// Inputs:
/// - `raw`: Text as typed or passed on the command line
///
/// Output:
/// - `Some(value)` for a number; `None` when empty, non-numeric, or `NaN`.
///
/// Details:
/// - Surrounding whitespace is ignored. Malformed input is never an error,
///   it just means "no bound".
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Inclusive price window derived from the two inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Lower bound; 0 when absent.
    pub min: f64,
    /// Upper bound; +∞ when absent.
    pub max: f64,
}

impl PriceRange {
    /// Build the effective window from raw min/max input text.
    pub fn from_inputs(min_raw: &str, max_raw: &str) -> Self {
        Self {
            min: parse_price_bound(min_raw).unwrap_or(0.0),
            max: parse_price_bound(max_raw).unwrap_or(f64::INFINITY),
        }
    }

    /// Whether `price` lies inside the window (both ends inclusive).
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// What: Decide whether `ch` may be typed into a price input holding `current`.
///
/// Output:
/// - `true` for ASCII digits, and for `.` when `current` has no dot yet.
pub fn accepts_price_char(current: &str, ch: char) -> bool {
    ch.is_ascii_digit() || (ch == '.' && !current.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Bound parsing treats blanks and junk as absent
    ///
    /// - Input: Numeric, padded, empty, alphabetic and NaN strings
    /// - Output: Parsed values for numbers; `None` otherwise
    fn parse_price_bound_cases() {
        assert_eq!(parse_price_bound("20"), Some(20.0));
        assert_eq!(parse_price_bound("  12.5 "), Some(12.5));
        assert_eq!(parse_price_bound(""), None);
        assert_eq!(parse_price_bound("   "), None);
        assert_eq!(parse_price_bound("abc"), None);
        assert_eq!(parse_price_bound("NaN"), None);
        assert_eq!(parse_price_bound("0"), Some(0.0));
    }

    #[test]
    /// What: Effective range defaults to [0, +inf] and is inclusive at both ends
    fn range_defaults_and_inclusivity() {
        let r = PriceRange::from_inputs("", "x");
        assert!(r.min.abs() < f64::EPSILON);
        assert!(r.max.is_infinite());
        let r = PriceRange::from_inputs("10", "50");
        assert!(r.contains(10.0));
        assert!(r.contains(50.0));
        assert!(!r.contains(50.01));
        assert!(!r.contains(9.99));
    }

    #[test]
    /// What: Price inputs only take digits and a single dot
    fn price_char_filter() {
        assert!(accepts_price_char("", '7'));
        assert!(accepts_price_char("12", '.'));
        assert!(!accepts_price_char("1.2", '.'));
        assert!(!accepts_price_char("", 'a'));
        assert!(!accepts_price_char("", '-'));
    }
}
