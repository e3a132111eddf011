// Chart Renderer: pure view model for the price chart (drawn by ui::chart_plot)
pub mod chart_view;
pub mod smoothing;

pub use chart_view::{ChartView, Tooltip, render, render_in, thin_ticks};
