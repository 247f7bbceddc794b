//! Storefront application module: terminal lifecycle, workers and the event loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers use `app::run(...)`.
pub use runtime::init::RunConfig;
pub use runtime::run;
