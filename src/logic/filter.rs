use crate::logic::price::PriceRange;
use crate::logic::sort::sort_by_price;
use crate::state::{Category, FilterCriteria, Product};

/// What: Case-insensitive title match.
///
/// Inputs:
/// - `title`: Product title
/// - `needle_lower`: Search text, already lower-cased
///
/// Output:
/// - `true` when `needle_lower` is empty or occurs in the lower-cased title.
fn title_matches(title: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || title.to_lowercase().contains(needle_lower)
}

/// What: Category match with the `All` sentinel.
fn category_matches(category: &Category, product_category: &str) -> bool {
    match category {
        Category::All => true,
        Category::Named(tag) => tag == product_category,
    }
}

/// What: Compute the view list for a catalog under the given criteria.
///
/// Inputs:
/// - `catalog`: Products in catalog order
/// - `criteria`: Search text, category, raw price bounds and sort order
///
/// Output:
/// - Products that pass every filter, in catalog order or sorted by price.
///
/// Details:
/// - Stages run in a fixed order: title search, category, price window, then
///   the stable price sort. The filters commute; the sort must run last.
/// - A min bound above the max bound leaves nothing, as does a category that
///   no product carries.
pub fn view_list(catalog: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let needle = criteria.search_text.to_lowercase();
    let range = PriceRange::from_inputs(&criteria.min_price, &criteria.max_price);
    let mut out: Vec<Product> = catalog
        .iter()
        .filter(|p| title_matches(&p.title, &needle))
        .filter(|p| category_matches(&criteria.category, &p.category))
        .filter(|p| range.contains(p.price))
        .cloned()
        .collect();
    sort_by_price(&mut out, criteria.sort_order);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SortOrder;

    fn product(id: u64, title: &str, category: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            category: category.to_string(),
            price,
            discount_percentage: 0.0,
            rating: 0.0,
            thumbnail: String::new(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Red Lipstick", "beauty", 10.0),
            product(2, "Blue Perfume", "fragrances", 50.0),
        ]
    }

    fn ids(v: &[Product]) -> Vec<u64> {
        v.iter().map(|p| p.id).collect()
    }

    #[test]
    /// What: Default criteria return the catalog unchanged
    fn default_criteria_is_identity() {
        let c = sample();
        assert_eq!(view_list(&c, &FilterCriteria::default()), c);
    }

    #[test]
    /// What: Search is a case-insensitive title substring
    ///
    /// - Input: "lip", "LIP", "perf"
    /// - Output: Only the matching product each time
    fn search_matches_title_substring() {
        let c = sample();
        for q in ["lip", "LIP", "Lipstick"] {
            let crit = FilterCriteria {
                search_text: q.into(),
                ..Default::default()
            };
            assert_eq!(ids(&view_list(&c, &crit)), vec![1]);
        }
        let crit = FilterCriteria {
            search_text: "perf".into(),
            ..Default::default()
        };
        assert_eq!(ids(&view_list(&c, &crit)), vec![2]);
    }

    #[test]
    /// What: Category filter matches exactly; unknown categories yield nothing
    fn category_filter() {
        let c = sample();
        let crit = FilterCriteria {
            category: Category::Named("fragrances".into()),
            ..Default::default()
        };
        assert_eq!(ids(&view_list(&c, &crit)), vec![2]);
        let crit = FilterCriteria {
            category: Category::Named("laptops".into()),
            ..Default::default()
        };
        assert!(view_list(&c, &crit).is_empty());
    }

    #[test]
    /// What: Price window from raw text, including inverted and junk bounds
    fn price_window() {
        let c = sample();
        let crit = FilterCriteria {
            min_price: "20".into(),
            ..Default::default()
        };
        assert_eq!(ids(&view_list(&c, &crit)), vec![2]);
        let crit = FilterCriteria {
            max_price: "10".into(),
            ..Default::default()
        };
        assert_eq!(ids(&view_list(&c, &crit)), vec![1]);
        let crit = FilterCriteria {
            min_price: "60".into(),
            max_price: "5".into(),
            ..Default::default()
        };
        assert!(view_list(&c, &crit).is_empty());
        let crit = FilterCriteria {
            min_price: "cheap".into(),
            max_price: "pricey".into(),
            ..Default::default()
        };
        assert_eq!(ids(&view_list(&c, &crit)), vec![1, 2]);
    }

    #[test]
    /// What: Filters combine and the sort runs on the filtered subset
    fn filters_combine_then_sort() {
        let mut c = sample();
        c.push(product(3, "Lip Balm", "beauty", 3.0));
        c.push(product(4, "Lip Oil", "beauty", 30.0));
        let crit = FilterCriteria {
            search_text: "lip".into(),
            category: Category::Named("beauty".into()),
            min_price: "5".into(),
            sort_order: SortOrder::HighToLow,
            ..Default::default()
        };
        assert_eq!(ids(&view_list(&c, &crit)), vec![4, 1]);
    }
}
