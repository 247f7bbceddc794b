//! Command-line list mode: load once, filter, print.

use std::io::Write;

use crate::app::RunConfig;
use crate::logic::view_list;
use crate::sources;
use crate::state::CatalogOutcome;

/// What: Load the catalog and write the view list to `out`.
///
/// Inputs:
/// - `config`: Endpoint, timeouts and criteria
/// - `out`: Destination for product lines
///
/// Output:
/// - `Ok(count)` of printed products; `Err(message)` with the user-facing
///   message when the load fails.
///
/// # Errors
/// - Returns `Err` when the catalog cannot be loaded or `out` cannot be written.
pub async fn run_list<W: Write>(config: &RunConfig, out: &mut W) -> Result<usize, String> {
    tracing::info!(url = %config.catalog_url, "List mode requested from CLI");
    let client = sources::build_client(config.connect_timeout, config.request_timeout)
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;
    let products = match sources::load_catalog(&client, &config.catalog_url).await {
        CatalogOutcome::Loaded(products) => products,
        CatalogOutcome::Failed(msg) => return Err(msg),
    };
    let view = view_list(&products, &config.criteria);
    for p in &view {
        writeln!(out, "{p}").map_err(|e| e.to_string())?;
    }
    tracing::info!(total = products.len(), shown = view.len(), "listed catalog");
    Ok(view.len())
}

/// What: Handle the `--list` flag and exit the process.
///
/// Details:
/// - Exits with 0 after printing, or 1 with the message on stderr when the load fails.
pub async fn handle_list(config: &RunConfig) -> ! {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    match run_list(config, &mut lock).await {
        Ok(_) => std::process::exit(0),
        Err(msg) => {
            drop(lock);
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
