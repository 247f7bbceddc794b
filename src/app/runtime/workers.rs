use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources;
use crate::state::CatalogOutcome;

use super::init::RunConfig;

/// What: Spawn the one-shot catalog load.
///
/// Inputs:
/// - `config`: Endpoint and timeouts
/// - `catalog_tx`: Channel for the outcome
///
/// Output:
/// - None (spawns async task)
///
/// Details:
/// - Runs exactly once. If the main loop has already exited, the send fails
///   and the result is dropped.
pub fn spawn_catalog_worker(
    config: &RunConfig,
    catalog_tx: mpsc::UnboundedSender<CatalogOutcome>,
) {
    let url = config.catalog_url.clone();
    let connect_timeout = config.connect_timeout;
    let request_timeout = config.request_timeout;
    tokio::spawn(async move {
        let outcome = match sources::build_client(connect_timeout, request_timeout) {
            Ok(client) => sources::load_catalog(&client, &url).await,
            Err(e) => {
                tracing::warn!(error = %e, "failed to create HTTP client");
                CatalogOutcome::Failed(sources::LOAD_ERROR_MESSAGE.to_string())
            }
        };
        if catalog_tx.send(outcome).is_err() {
            tracing::debug!("catalog outcome dropped; main loop already exited");
        }
    });
}

/// What: Spawn the terminal event reader thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Channel for terminal events
/// - `cancelled`: Exit flag checked between polls
///
/// Details:
/// - Polls with a 50ms timeout so the thread notices cancellation promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // transient read error
                    }
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}
