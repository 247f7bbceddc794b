//! Command-line argument parsing and handling.

pub mod definition;
pub mod list;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, SortArg, resolve_run_config};
pub use list::{handle_list, run_list};
pub use utils::determine_log_level;
