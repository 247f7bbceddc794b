use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::CatalogOutcome;

/// What: Receiving side of the runtime channels, owned by the main loop.
///
/// Details:
/// - Terminal events flow from the event thread; the catalog outcome flows
///   from the one-shot load worker.
/// - The matching senders live in [`WorkerSenders`] and are moved into the
///   workers, so each receiver closes once its producer is gone.
pub struct Channels {
    /// Terminal events for the main loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the event thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Load result for the main loop.
    pub catalog_rx: mpsc::UnboundedReceiver<CatalogOutcome>,
}

/// Sending side handed to the background workers.
pub struct WorkerSenders {
    /// Sender for the event thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Sender for the load worker.
    pub catalog_tx: mpsc::UnboundedSender<CatalogOutcome>,
}

impl Channels {
    /// What: Create all runtime channels.
    ///
    /// Output:
    /// - The receivers for the main loop and the senders for the workers.
    pub fn new() -> (Self, WorkerSenders) {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (catalog_tx, catalog_rx) = mpsc::unbounded_channel::<CatalogOutcome>();
        let channels = Self {
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            catalog_rx,
        };
        (
            channels,
            WorkerSenders {
                event_tx,
                catalog_tx,
            },
        )
    }
}
