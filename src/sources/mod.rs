//! Network data retrieval.

mod catalog;

/// Result type alias for network fetch operations.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use catalog::{LOAD_ERROR_MESSAGE, build_client, fetch_catalog, load_catalog, parse_catalog};
