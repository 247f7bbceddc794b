//! Application state: value types plus the `AppState` container.

pub mod app_state;
pub mod types;

// Public re-exports so callers can use `crate::state::*`
pub use app_state::{AppState, HitAreas};
pub use types::{
    CATEGORY_TAGS, CatalogOutcome, Category, FilterAction, FilterCriteria, Focus, LoadStatus,
    PriceField, Product, Selection, SortOrder,
};
