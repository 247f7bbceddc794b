use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
pub mod init;
mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use init::{RunConfig, initialize_app_state};
use workers::{spawn_catalog_worker, spawn_event_thread};

/// Result type alias for the runtime entrypoint.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the storefront TUI end-to-end: initialize terminal and state, request the
/// catalog once, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `config`: Endpoint, timeouts and initial filter criteria
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup/restore failures.
///
/// Details:
/// - `STOREFRONT_TEST_HEADLESS=1` skips terminal setup and the event thread;
///   a headless run returns once the load outcome has been applied.
/// - The catalog load is the explicit initialization step: spawned once here,
///   its tagged outcome arrives over a channel and is applied by the loop.
/// - On exit the event thread is signalled to stop; an in-flight load is left
///   to finish and its result is discarded.
pub async fn run(config: RunConfig) -> Result<()> {
    let headless = std::env::var("STOREFRONT_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = initialize_app_state(&config);
    let (mut channels, senders) = Channels::new();

    spawn_catalog_worker(&config, senders.catalog_tx);
    spawn_event_thread(
        headless,
        senders.event_tx,
        channels.event_thread_cancelled.clone(),
    );

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    tracing::debug!(selected = app.selection.len(), "main loop exited");
    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
