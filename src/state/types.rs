//! Core value types used by storefront state.

use std::collections::BTreeSet;
use std::fmt;

use crate::util::format_amount;

/// One product record as delivered by the catalog endpoint.
///
/// The JSON field names follow the remote API (`discountPercentage`), so the
/// struct renames from camelCase. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable unique identifier.
    pub id: u64,
    /// Display title, matched by the search box.
    pub title: String,
    /// Category tag such as `beauty` or `groceries`.
    pub category: String,
    /// Unit price; expected non-negative.
    pub price: f64,
    /// Discount in percent. Not validated.
    #[serde(default)]
    pub discount_percentage: f64,
    /// Average rating.
    #[serde(default)]
    pub rating: f64,
    /// Thumbnail reference (usually a URL).
    #[serde(default)]
    pub thumbnail: String,
}

/// Category filter value.
///
/// `All` is the sentinel that disables category filtering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// Match every product.
    #[default]
    All,
    /// Match products whose category tag equals this string exactly.
    Named(String),
}

/// Category tags offered as buttons in the navbar, in display order.
pub const CATEGORY_TAGS: [&str; 4] = ["beauty", "fragrances", "furniture", "groceries"];

impl Category {
    /// What: Build a category from a config or CLI value.
    ///
    /// Inputs:
    /// - `raw`: Category text; `All` (any case) or empty selects the sentinel.
    ///
    /// Output:
    /// - `Category::All` or `Category::Named` carrying the trimmed text.
    pub fn from_value(raw: &str) -> Self {
        let t = raw.trim();
        if t.is_empty() || t.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(t.to_string())
        }
    }

    /// Button label: `All` or the tag with its first letter upper-cased.
    pub fn label(&self) -> String {
        match self {
            Self::All => "All".to_string(),
            Self::Named(tag) => {
                let mut chars = tag.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            }
        }
    }

    /// What: Return the next entry of the fixed button row.
    ///
    /// Output:
    /// - `All` → first tag → ... → last tag → `All`. A category outside the
    ///   button row (e.g. set from the CLI) continues with `All`.
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Named(CATEGORY_TAGS[0].to_string()),
            Self::Named(tag) => CATEGORY_TAGS
                .iter()
                .position(|t| t == tag)
                .and_then(|i| CATEGORY_TAGS.get(i + 1))
                .map_or(Self::All, |t| Self::Named((*t).to_string())),
        }
    }

    /// All navbar buttons in display order, starting with `All`.
    pub fn buttons() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(CATEGORY_TAGS.iter().map(|t| Self::Named((*t).to_string())))
            .collect()
    }
}

/// Price ordering applied as the last pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep catalog order.
    #[default]
    None,
    /// Cheapest first.
    LowToHigh,
    /// Most expensive first.
    HighToLow,
}

impl SortOrder {
    /// Parse a config/CLI key. Accepts `_`, `-` or camelCase spellings.
    pub fn from_config_key(s: &str) -> Option<Self> {
        let k = s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "");
        match k.as_str() {
            "" | "none" | "unsorted" => Some(Self::None),
            "lowtohigh" | "asc" | "ascending" => Some(Self::LowToHigh),
            "hightolow" | "desc" | "descending" => Some(Self::HighToLow),
            _ => None,
        }
    }

    /// Label shown on the sort control.
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Sort By",
            Self::LowToHigh => "Price: Low to High",
            Self::HighToLow => "Price: High to Low",
        }
    }

    /// Cycle `None` → `LowToHigh` → `HighToLow` → `None`.
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::LowToHigh,
            Self::LowToHigh => Self::HighToLow,
            Self::HighToLow => Self::None,
        }
    }
}

/// Which of the two price inputs an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    /// Lower bound input.
    Min,
    /// Upper bound input.
    Max,
}

/// Transient filter state driven by the toolbar controls.
///
/// Price bounds keep the raw input text; parsing happens in the pipeline so
/// that unparseable text simply means "no bound".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive title substring.
    pub search_text: String,
    /// Category filter.
    pub category: Category,
    /// Raw text of the minimum price input.
    pub min_price: String,
    /// Raw text of the maximum price input.
    pub max_price: String,
    /// Ordering of the view list.
    pub sort_order: SortOrder,
}

/// A single change to [`FilterCriteria`], consumed by the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace the search text.
    SetSearch(String),
    /// Append one character to the search text.
    PushSearchChar(char),
    /// Remove the last character of the search text.
    PopSearchChar,
    /// Select a category.
    SetCategory(Category),
    /// Advance to the next category button.
    CycleCategory,
    /// Replace the minimum price text.
    SetMinPrice(String),
    /// Replace the maximum price text.
    SetMaxPrice(String),
    /// Type one character into a price input (digits and one `.` only).
    PushPriceChar(PriceField, char),
    /// Remove the last character of a price input.
    PopPriceChar(PriceField),
    /// Select a sort order.
    SetSort(SortOrder),
    /// Advance to the next sort order.
    CycleSort,
}

/// Set of product identifiers the user has marked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected ids.
    ids: BTreeSet<u64>,
}

impl Selection {
    /// Add `id` when absent, remove it when present.
    pub fn toggle(&mut self, id: u64) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Whether `id` is currently selected.
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Lifecycle of the one-shot catalog load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Catalog received (possibly empty).
    Loaded,
    /// Load failed; carries the user-facing message.
    Error(String),
}

impl LoadStatus {
    /// Whether the load is still in flight.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Result of the startup load, delivered from the worker to the main loop.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogOutcome {
    /// Products in response order.
    Loaded(Vec<Product>),
    /// User-facing failure message.
    Failed(String),
}

/// Which control receives typed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Title search box.
    #[default]
    Search,
    /// Minimum price input.
    MinPrice,
    /// Maximum price input.
    MaxPrice,
    /// Card grid (cursor navigation and selection).
    Grid,
}

impl Focus {
    /// Next control in tab order.
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::MinPrice,
            Self::MinPrice => Self::MaxPrice,
            Self::MaxPrice => Self::Grid,
            Self::Grid => Self::Search,
        }
    }

    /// Previous control in tab order.
    pub const fn prev(self) -> Self {
        match self {
            Self::Search => Self::Grid,
            Self::MinPrice => Self::Search,
            Self::MaxPrice => Self::MinPrice,
            Self::Grid => Self::MaxPrice,
        }
    }
}

/// Tab-separated line: `id  title  category  $price  discount%  rating`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t${}\t{}%\t{}",
            self.id,
            self.title,
            self.category,
            format_amount(self.price),
            format_amount(self.discount_percentage),
            format_amount(self.rating)
        )
    }
}
