use crate::utils::app_time::now;
use eframe::egui;
use poll_promise::Promise;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::detail::{DetailLoader, DetailState, LoadedAsset};
use crate::error::LoadError;
use crate::ui::app::CoinDetailApp;

pub(super) struct LoadResult {
    pub(super) symbol: String,
    pub(super) outcome: Result<LoadedAsset, LoadError>,
    elapsed_time: Duration,
}

impl LoadResult {
    pub(super) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

impl CoinDetailApp {
    /// Switches the page to `symbol` and starts its (single) cache read.
    pub(super) fn navigate(&mut self, symbol: &str) {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Navigating to {}", symbol);
        }

        self.symbol_input = symbol.to_string();
        self.last_symbol = Some(symbol.to_string());
        self.state = DetailState::Pending {
            symbol: symbol.to_string(),
        };

        #[cfg(target_arch = "wasm32")]
        {
            crate::ui::navigation::set_location_symbol(symbol);
            self.route_symbol = Some(symbol.to_string());
        }

        self.start_load(symbol.to_string());
    }

    fn start_load(&mut self, symbol: String) {
        let Some(loader) = self.loader.clone() else {
            log::error!("No cache loader configured; {} stays pending", symbol);
            return;
        };
        let seed = self.options.seed;

        // Any read still in flight belongs to a previous symbol
        self.load_promise = None;

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("cache_read", move || run_load(loader, symbol, seed));

        #[cfg(target_arch = "wasm32")]
        let promise = Promise::from_ready(run_load(loader, symbol, seed));

        self.load_promise = Some(promise);
    }

    pub(super) fn poll_load(&mut self, ctx: &egui::Context) {
        let finished = self
            .load_promise
            .as_ref()
            .is_some_and(|promise| promise.ready().is_some());

        if !finished {
            if self.is_loading() {
                ctx.request_repaint_after(Duration::from_millis(50));
            }
            return;
        }

        let Some(result) = self
            .load_promise
            .take()
            .and_then(|promise| promise.try_take().ok())
        else {
            return;
        };

        if self.state.symbol() != Some(result.symbol.as_str()) {
            #[cfg(debug_assertions)]
            log::info!("Discarding stale read for {}", result.symbol);
            return;
        }

        if result.elapsed_time().as_millis() > 100 {
            log::info!(
                "✅ Cache read for {} completed in {:.2}s",
                result.symbol,
                result.elapsed_time().as_secs_f32()
            );
        }

        self.state =
            DetailState::resolve(&result.symbol, result.outcome, self.options.reveal_missing);
    }

    pub(super) fn is_loading(&self) -> bool {
        self.load_promise.is_some()
    }
}

fn run_load(loader: DetailLoader, symbol: String, seed: Option<u64>) -> LoadResult {
    let start = now();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let outcome = loader.open(&symbol, &mut rng);

    LoadResult {
        symbol,
        outcome,
        elapsed_time: start.elapsed(),
    }
}
