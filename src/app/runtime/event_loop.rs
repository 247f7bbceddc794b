use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Wait for one message from any channel and apply it.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - Terminal events go to `events::handle_event`; the catalog outcome is
///   applied to the state.
/// - Returns `true` once both channels are closed: the load worker has sent
///   its outcome and no event thread is running (headless mode).
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app)
        }
        Some(outcome) = channels.catalog_rx.recv() => {
            app.apply_catalog_outcome(outcome);
            false
        }
        else => true
    }
}

/// What: Run the main event loop: render, then process one message.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels
///
/// Output: None (runs until exit condition is met)
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }
        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
