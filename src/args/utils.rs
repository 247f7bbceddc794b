//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log filter directive (trace, debug, info, warn, error, or a `RUST_LOG` string).
///
/// Details:
/// - Verbose flag overrides everything.
/// - An explicit `--log-level` other than the default wins over `RUST_LOG`.
/// - Otherwise `RUST_LOG` is used when set, falling back to `info`.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        return "debug".to_string();
    }
    if args.log_level != "info" {
        return args.log_level.clone();
    }
    std::env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| args.log_level.clone())
}
