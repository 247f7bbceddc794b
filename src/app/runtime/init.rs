use std::time::Duration;

use crate::state::{AppState, FilterCriteria, LoadStatus};
use crate::theme::Settings;

/// Everything `run` needs to start: endpoint, timeouts and initial criteria.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Catalog endpoint.
    pub catalog_url: String,
    /// Connect timeout for the catalog request.
    pub connect_timeout: Duration,
    /// Overall timeout for the catalog request.
    pub request_timeout: Duration,
    /// Criteria the view starts with.
    pub criteria: FilterCriteria,
}

impl RunConfig {
    /// What: Derive a run configuration from settings.conf values.
    ///
    /// Output:
    /// - Endpoint and timeouts copied over; criteria start with the configured
    ///   category and sort order and empty inputs.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            catalog_url: settings.catalog_url.clone(),
            connect_timeout: Duration::from_secs(settings.connect_timeout_secs),
            request_timeout: Duration::from_secs(settings.request_timeout_secs),
            criteria: FilterCriteria {
                category: settings.default_category.clone(),
                sort_order: settings.default_sort,
                ..FilterCriteria::default()
            },
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// What: Build the initial application state for a run.
///
/// Output:
/// - State seeded with the configured criteria and `LoadStatus::Loading`,
///   since the load is requested right after initialization.
pub fn initialize_app_state(config: &RunConfig) -> AppState {
    let mut app = AppState::with_criteria(config.criteria.clone());
    app.load_status = LoadStatus::Loading;
    app.refresh_view();
    tracing::debug!(
        url = %config.catalog_url,
        category = ?app.criteria.category,
        sort = ?app.criteria.sort_order,
        "initialized app state"
    );
    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Category, SortOrder};

    #[test]
    /// What: Settings flow into the run configuration and the initial state
    fn settings_seed_config_and_state() {
        let settings = Settings {
            catalog_url: "http://127.0.0.1:1/products".into(),
            connect_timeout_secs: 2,
            request_timeout_secs: 4,
            default_sort: SortOrder::HighToLow,
            default_category: Category::Named("furniture".into()),
        };
        let cfg = RunConfig::from_settings(&settings);
        assert_eq!(cfg.connect_timeout, Duration::from_secs(2));
        assert_eq!(cfg.request_timeout, Duration::from_secs(4));
        let app = initialize_app_state(&cfg);
        assert!(app.load_status.is_loading());
        assert_eq!(app.criteria.sort_order, SortOrder::HighToLow);
        assert_eq!(app.criteria.category, Category::Named("furniture".into()));
        assert!(app.view.is_empty());
    }
}
