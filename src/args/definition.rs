//! Command-line argument definition and processing.

use clap::{Parser, ValueEnum};

use crate::app::RunConfig;
use crate::state::{Category, FilterAction, FilterCriteria, SortOrder};
use crate::theme::Settings;

/// Sort order values accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Keep catalog order.
    None,
    /// Cheapest first.
    LowToHigh,
    /// Most expensive first.
    HighToLow,
}

impl From<SortArg> for SortOrder {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::None => Self::None,
            SortArg::LowToHigh => Self::LowToHigh,
            SortArg::HighToLow => Self::HighToLow,
        }
    }
}

/// storefront - browse a remote product catalog in the terminal
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(version)]
#[command(about = "Browse a remote product catalog in the terminal", long_about = None)]
pub struct Args {
    /// Catalog endpoint (overrides `catalog_url` in settings.conf)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Load the catalog once, print the filtered list to stdout and exit
    #[arg(short, long)]
    pub list: bool,

    /// Initial search text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Initial category (`All`, beauty, fragrances, furniture, groceries, ...)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum price (non-numeric values are ignored)
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum price (non-numeric values are ignored)
    #[arg(long)]
    pub max_price: Option<String>,

    /// Sort order
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,
}

/// What: Merge settings.conf values with command-line flags.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Loaded settings
///
/// Output:
/// - Run configuration where every flag given on the command line wins over the file.
///
/// Details:
/// - Criteria flags are applied through the same reducer the UI uses.
pub fn resolve_run_config(args: &Args, settings: &Settings) -> RunConfig {
    let mut cfg = RunConfig::from_settings(settings);
    let endpoint = args.endpoint.as_deref().map(str::trim);
    if let Some(url) = endpoint.filter(|u| !u.is_empty()) {
        cfg.catalog_url = url.to_string();
    }
    let mut actions = Vec::new();
    if let Some(s) = &args.search {
        actions.push(FilterAction::SetSearch(s.clone()));
    }
    if let Some(c) = &args.category {
        actions.push(FilterAction::SetCategory(Category::from_value(c)));
    }
    if let Some(m) = &args.min_price {
        actions.push(FilterAction::SetMinPrice(m.clone()));
    }
    if let Some(m) = &args.max_price {
        actions.push(FilterAction::SetMaxPrice(m.clone()));
    }
    if let Some(s) = args.sort {
        actions.push(FilterAction::SetSort(s.into()));
    }
    cfg.criteria = actions
        .into_iter()
        .fold(cfg.criteria, FilterCriteria::apply);
    cfg
}
