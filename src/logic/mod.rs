//! Core non-UI logic: the filter/sort pipeline, the criteria reducer and
//! selection helpers.

pub mod filter;
pub mod price;
pub mod reduce;
pub mod selection;
pub mod sort;

// Re-export public APIs so callers can use `crate::logic::...`
pub use filter::view_list;
pub use price::{PriceRange, parse_price_bound};
pub use selection::{move_cursor, toggle_at_cursor, toggle_product};
pub use sort::{is_sorted_by_price, sort_by_price};
