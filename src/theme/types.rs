use ratatui::style::Color;

use crate::state::{Category, SortOrder};

/// Default catalog endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Darkest background shade, used as text on highlighted chips.
    pub crust: Color,
    /// Subtle surface color for unfocused borders.
    pub surface1: Color,
    /// Muted overlay for titles and placeholders.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent used for the cursor card and focused controls.
    pub sapphire: Color,
    /// Accent for the brand title and focused borders.
    pub mauve: Color,
    /// Prices.
    pub green: Color,
    /// Ratings and the loading indicator.
    pub yellow: Color,
    /// Selected card border and error text.
    pub red: Color,
    /// Active category/sort chip background.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Catalog endpoint fetched once at startup.
    pub catalog_url: String,
    /// Connect timeout for the catalog request, in seconds.
    pub connect_timeout_secs: u64,
    /// Overall timeout for the catalog request, in seconds.
    pub request_timeout_secs: u64,
    /// Initial sort order.
    pub default_sort: SortOrder,
    /// Initial category filter.
    pub default_category: Category,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            default_sort: SortOrder::None,
            default_category: Category::All,
        }
    }
}
