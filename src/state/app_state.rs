//! Central `AppState` container.

use ratatui::layout::Rect;

use crate::logic::view_list;
use crate::state::types::{
    CatalogOutcome, Category, FilterAction, FilterCriteria, Focus, LoadStatus, Product, Selection,
};

/// Hit-test rectangles recorded by the renderer for mouse handling.
#[derive(Debug, Default, Clone)]
pub struct HitAreas {
    /// Category buttons with their on-screen rectangles.
    pub categories: Vec<(Category, Rect)>,
    /// Search box.
    pub search: Option<Rect>,
    /// Minimum price input.
    pub min_price: Option<Rect>,
    /// Maximum price input.
    pub max_price: Option<Rect>,
    /// Sort control.
    pub sort: Option<Rect>,
    /// Rendered cards as (product id, index into view, rectangle).
    pub cards: Vec<(u64, usize, Rect)>,
}

/// Application state owned by the main loop and consumed by the view.
///
/// The catalog, the filter criteria and the selection each have a single
/// writer: the outcome handler, the reducer and the toggle helpers.
#[derive(Debug, Default)]
pub struct AppState {
    /// Products from the last successful load, in response order.
    pub catalog: Vec<Product>,
    /// Current filter and sort inputs.
    pub criteria: FilterCriteria,
    /// Marked product ids.
    pub selection: Selection,
    /// Lifecycle of the startup load.
    pub load_status: LoadStatus,
    /// Cached pipeline output for `catalog` under `criteria`.
    pub view: Vec<Product>,
    /// Control receiving typed input.
    pub focus: Focus,
    /// Index into `view` of the highlighted card.
    pub cursor: usize,
    /// First grid row drawn (scroll offset in rows).
    pub grid_scroll: usize,
    /// Column count of the last rendered grid; used for row-wise cursor moves.
    pub grid_columns: usize,
    /// Rectangles recorded during the last render.
    pub hit: HitAreas,
}

impl AppState {
    /// What: Create state seeded with initial criteria (from settings or CLI).
    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            grid_columns: 1,
            ..Self::default()
        }
    }

    /// What: Run the criteria reducer and recompute the view.
    ///
    /// Inputs:
    /// - `action`: Filter change to apply
    ///
    /// Output:
    /// - Updates `criteria`, `view` and clamps `cursor`.
    pub fn dispatch(&mut self, action: FilterAction) {
        tracing::trace!(?action, "filter action");
        self.criteria = std::mem::take(&mut self.criteria).apply(action);
        self.refresh_view();
    }

    /// What: Apply the result of the startup load.
    ///
    /// Details:
    /// - Success replaces the catalog wholesale; failure clears it and stores the message.
    /// - Either way the view is recomputed, so a failed load renders zero cards.
    pub fn apply_catalog_outcome(&mut self, outcome: CatalogOutcome) {
        match outcome {
            CatalogOutcome::Loaded(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                self.catalog = products;
                self.load_status = LoadStatus::Loaded;
            }
            CatalogOutcome::Failed(message) => {
                self.catalog.clear();
                self.load_status = LoadStatus::Error(message);
            }
        }
        self.refresh_view();
    }

    /// What: Recompute `view` from `catalog` and `criteria` and keep the cursor in range.
    pub fn refresh_view(&mut self) {
        self.view = view_list(&self.catalog, &self.criteria);
        if self.view.is_empty() {
            self.cursor = 0;
            self.grid_scroll = 0;
        } else {
            self.cursor = self.cursor.min(self.view.len() - 1);
        }
    }

    /// Product under the grid cursor, if any.
    pub fn current(&self) -> Option<&Product> {
        self.view.get(self.cursor)
    }

    /// User-facing error message, when the load failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.load_status {
            LoadStatus::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SortOrder;

    fn product(id: u64, title: &str, category: &str, price: f64) -> Product {
        Product {
            id,
            title: title.into(),
            category: category.into(),
            price,
            discount_percentage: 0.0,
            rating: 0.0,
            thumbnail: String::new(),
        }
    }

    #[test]
    /// What: A failed load empties the catalog and view and records the message
    fn failed_load_renders_nothing() {
        let mut app = AppState::default();
        app.load_status = LoadStatus::Loading;
        app.apply_catalog_outcome(CatalogOutcome::Failed("boom".into()));
        assert!(app.catalog.is_empty());
        assert!(app.view.is_empty());
        assert_eq!(app.error_message(), Some("boom"));
    }

    #[test]
    /// What: Selection survives an item being filtered out of view
    fn selection_retained_when_filtered_out() {
        let mut app = AppState::default();
        app.apply_catalog_outcome(CatalogOutcome::Loaded(vec![
            product(1, "Red Lipstick", "beauty", 10.0),
            product(2, "Blue Perfume", "fragrances", 50.0),
        ]));
        app.selection.toggle(1);
        let fragrances = Category::Named("fragrances".into());
        app.dispatch(FilterAction::SetCategory(fragrances));
        assert_eq!(app.view.len(), 1);
        assert!(app.selection.contains(1));
        app.dispatch(FilterAction::SetCategory(Category::All));
        assert!(app.selection.contains(1));
    }

    #[test]
    /// What: Cursor is clamped when the view shrinks
    fn cursor_clamped_after_filtering() {
        let mut app = AppState::with_criteria(FilterCriteria::default());
        app.apply_catalog_outcome(CatalogOutcome::Loaded(vec![
            product(1, "A", "beauty", 1.0),
            product(2, "B", "beauty", 2.0),
            product(3, "C", "beauty", 3.0),
        ]));
        app.cursor = 2;
        app.dispatch(FilterAction::SetMaxPrice("1.5".into()));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.current().map(|p| p.id), Some(1));
        app.dispatch(FilterAction::SetSort(SortOrder::HighToLow));
        assert_eq!(app.criteria.sort_order, SortOrder::HighToLow);
    }
}
