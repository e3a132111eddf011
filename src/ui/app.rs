use eframe::{Frame, egui};
use poll_promise::Promise;
use serde::{Deserialize, Serialize};

use crate::AppOptions;
use crate::detail::{DetailLoader, DetailState};
use crate::ui::app_async::LoadResult;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CoinDetailApp {
    /// Last symbol opened; reopened on the next start when no symbol is given
    pub(super) last_symbol: Option<String>,

    // Runtime-only state
    #[serde(skip)]
    pub(super) symbol_input: String,
    #[serde(skip)]
    pub(super) loader: Option<DetailLoader>,
    #[serde(skip)]
    pub(super) load_promise: Option<Promise<LoadResult>>,
    #[serde(skip)]
    pub(super) state: DetailState,
    #[serde(skip)]
    pub(super) options: AppOptions,
    /// Symbol in the URL hash the last time it was checked
    #[cfg(target_arch = "wasm32")]
    #[serde(skip)]
    pub(super) route_symbol: Option<String>,
}

impl CoinDetailApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        loader: DetailLoader,
        options: AppOptions,
    ) -> Self {
        let restored: Option<CoinDetailApp> = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            if restored.is_some() {
                log::info!("Successfully loaded persisted state");
            } else {
                log::info!("No persisted Coin Detail state. Creating anew.");
            }
        }

        let mut app = restored.unwrap_or_default();
        app.loader = Some(loader);
        app.options = options;
        app.open_initial_symbol();
        app
    }

    /// Explicit symbol (CLI or URL hash) first, then the persisted one.
    fn open_initial_symbol(&mut self) {
        let initial = self
            .options
            .initial_symbol
            .clone()
            .or_else(|| self.last_symbol.clone());

        match initial {
            Some(symbol) => self.navigate(&symbol),
            None => self.state = DetailState::Idle,
        }
    }

    /// Follows edits of the URL hash (`#/crypto/ETH`).
    #[cfg(target_arch = "wasm32")]
    fn sync_route(&mut self, ctx: &egui::Context) {
        if let Some(symbol) = crate::ui::navigation::symbol_from_location() {
            if self.route_symbol.as_deref() != Some(symbol.as_str()) {
                self.navigate(&symbol);
            }
        }
        // The hash can change without any egui input event
        ctx.request_repaint_after(std::time::Duration::from_millis(500));
    }
}

impl eframe::App for CoinDetailApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        #[cfg(target_arch = "wasm32")]
        self.sync_route(ctx);

        self.poll_load(ctx);

        self.render_top_panel(ctx);
        self.render_central_panel(ctx);
    }
}
