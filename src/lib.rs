#![allow(clippy::collapsible_if)]

// Core modules
pub mod chart;
pub mod config;
pub mod data;
pub mod detail;
pub mod domain;
pub mod error;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use chart::ChartView;
pub use data::{CachedCollection, CollectionStore, JsonFileStore, MemoryStore};
pub use detail::{DetailLoader, DetailState, DetailView, LoadedAsset};
pub use domain::{AssetRecord, HistoricalPrice, TimeSeriesPoint};
pub use error::LoadError;
pub use ui::CoinDetailApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

use crate::config::persistence::default_cache_filename;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Symbol to open on start (case-sensitive, e.g. BTC)
    #[arg(long)]
    pub symbol: Option<String>,

    /// JSON file holding the cached asset collection
    #[arg(long, default_value_t = default_cache_filename())]
    pub cache: String,

    /// Seed for placeholder price history (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show "not found" for unknown symbols instead of loading forever
    #[arg(long, default_value_t = false)]
    pub show_missing: bool,
}

/// Start-up choices shared by the native and web front ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppOptions {
    pub initial_symbol: Option<String>,
    pub seed: Option<u64>,
    /// Surface unavailable assets as `DetailState::NotFound`
    pub reveal_missing: bool,
}

impl From<&Cli> for AppOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            initial_symbol: cli.symbol.clone(),
            seed: cli.seed,
            reveal_missing: cli.show_missing,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    loader: DetailLoader,
    options: AppOptions,
) -> Box<dyn eframe::App> {
    log::info!(
        "Opening coin detail from {} (initial symbol: {:?})",
        loader.store_signature(),
        options.initial_symbol
    );
    Box::new(CoinDetailApp::new(cc, loader, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_pending_for_missing_assets() {
        let cli = Cli::parse_from(["coin-detail"]);
        assert_eq!(cli.cache, "cache/cryptoData.json");
        assert_eq!(AppOptions::from(&cli), AppOptions::default());
    }

    #[test]
    fn cli_flags_map_onto_options() {
        let cli = Cli::parse_from([
            "coin-detail",
            "--symbol",
            "BTC",
            "--seed",
            "9",
            "--show-missing",
            "--cache",
            "/tmp/assets.json",
        ]);
        assert_eq!(cli.cache, "/tmp/assets.json");
        assert_eq!(
            AppOptions::from(&cli),
            AppOptions {
                initial_symbol: Some("BTC".to_string()),
                seed: Some(9),
                reveal_missing: true,
            }
        );
    }
}
