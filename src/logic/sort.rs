use std::cmp::Ordering;

use crate::state::{Product, SortOrder};

/// What: Apply a price ordering to a product list in place.
///
/// Inputs:
/// - `items`: Products to reorder
/// - `order`: Requested ordering
///
/// Output:
/// - `items` sorted by price ascending or descending; untouched for `SortOrder::None`.
///
/// Details:
/// - Uses the stable `sort_by`, so products with equal prices keep their
///   catalog order in both directions.
/// - Prices are compared with `total_cmp` so the comparator stays total even
///   if a payload carries a NaN.
pub fn sort_by_price(items: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::LowToHigh => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::HighToLow => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}

/// What: Check that adjacent items respect `order`.
///
/// Output:
/// - `true` when every adjacent pair is ordered (always `true` for `None`).
pub fn is_sorted_by_price(items: &[Product], order: SortOrder) -> bool {
    let want = match order {
        SortOrder::None => return true,
        SortOrder::LowToHigh => Ordering::Greater,
        SortOrder::HighToLow => Ordering::Less,
    };
    items
        .windows(2)
        .all(|w| w[0].price.total_cmp(&w[1].price) != want)
}
