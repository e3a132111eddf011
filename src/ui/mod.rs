// User interface components
pub mod app;
mod app_async;
pub mod chart_plot;
pub mod config;
pub mod navigation;
pub mod plot_layers;
pub mod styles;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::CoinDetailApp;
pub use config::UI_CONFIG;
