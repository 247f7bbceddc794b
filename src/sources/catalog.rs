//! Product catalog fetcher.

use std::time::Duration;

use tracing::{info, warn};

use crate::state::{CatalogOutcome, Product};

/// Result type alias for catalog fetching operations.
type Result<T> = super::Result<T>;

/// Message shown in place of the grid when the load fails.
pub const LOAD_ERROR_MESSAGE: &str = "Error fetching products. Please try again later.";

/// Wire shape of the catalog endpoint response.
#[derive(serde::Deserialize)]
struct CatalogPayload {
    /// Product records in response order.
    products: Vec<Product>,
}

/// What: Decode a catalog response body.
///
/// Inputs:
/// - `body`: JSON text shaped as `{ "products": [ ... ] }`
///
/// Output:
/// - `Ok(products)` in response order; `Err` when the body does not match.
///
/// # Errors
/// - Returns `Err` when the JSON is malformed, `products` is missing, or a
///   record lacks `id`, `title`, `category` or `price`.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>> {
    let payload: CatalogPayload = serde_json::from_str(body)?;
    Ok(payload.products)
}

/// What: Build the HTTP client used for the catalog request.
///
/// Inputs:
/// - `connect_timeout`: TCP/TLS connect limit
/// - `request_timeout`: Overall request limit
///
/// # Errors
/// - Returns `Err` when the TLS backend cannot be initialized.
pub fn build_client(
    connect_timeout: Duration,
    request_timeout: Duration,
) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .timeout(request_timeout)
        .user_agent(format!("storefront/{}", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// What: Fetch the product catalog with a single GET.
///
/// Inputs:
/// - `client`: HTTP client
/// - `url`: Catalog endpoint
///
/// Output:
/// - `Ok(products)` on a 2xx response with a valid body; `Err` otherwise.
///
/// # Errors
/// - Transport failures (DNS, connect, timeout)
/// - Non-success HTTP status
/// - Body that [`parse_catalog`] rejects
///
/// Details:
/// - One attempt, no retry. The caller decides what to show the user.
pub async fn fetch_catalog(client: &reqwest::Client, url: &str) -> Result<Vec<Product>> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    info!(
        status = status.as_u16(),
        bytes = body.len(),
        "fetched catalog"
    );
    if !status.is_success() {
        let preview: String = body.chars().take(300).collect();
        warn!(
            status = status.as_u16(),
            preview = preview,
            "catalog endpoint returned non-success status"
        );
        return Err(format!("catalog endpoint status {status}").into());
    }
    parse_catalog(&body)
}

/// What: Run the startup load and fold every failure into one outcome.
///
/// Inputs:
/// - `client`: HTTP client
/// - `url`: Catalog endpoint
///
/// Output:
/// - `CatalogOutcome::Loaded` on success; `CatalogOutcome::Failed` carrying
///   [`LOAD_ERROR_MESSAGE`] for any failure.
///
/// Details:
/// - The underlying cause is logged, never shown.
pub async fn load_catalog(client: &reqwest::Client, url: &str) -> CatalogOutcome {
    match fetch_catalog(client, url).await {
        Ok(products) => CatalogOutcome::Loaded(products),
        Err(e) => {
            warn!(url = %url, error = %e, "catalog load failed");
            CatalogOutcome::Failed(LOAD_ERROR_MESSAGE.to_string())
        }
    }
}
