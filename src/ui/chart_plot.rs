use eframe::egui;
use egui_plot::{AxisHints, Corner, GridMark, HPlacement, Legend, Plot};

use crate::chart::ChartView;
use crate::config::PLOT_CONFIG;
use crate::ui::plot_layers::{
    AreaFillLayer, CrosshairLayer, HoverLayer, LayerContext, PlotLayer, PriceLineLayer,
};

/// Draws `chart` as a smoothed, filled price line with date labels on x and
/// currency labels on y. Static: no zoom, drag or scroll.
pub fn show_price_chart(ui: &mut egui::Ui, chart: &ChartView) {
    let legend = Legend::default().position(Corner::LeftTop);
    let tick_indices: Vec<f64> = chart.x_ticks.iter().map(|&i| i as f64).collect();
    let y_ticks = chart.y_ticks();
    let step_size = chart.y_tick_step();
    let (x_min, x_max) = chart.x_bounds;
    let (y_min, y_max) = chart.y_bounds;

    Plot::new(("price_chart", &chart.title))
        .view_aspect(PLOT_CONFIG.plot_aspect_ratio)
        .legend(legend)
        .custom_x_axes(vec![create_x_axis(chart)])
        .custom_y_axes(vec![create_y_axis()])
        // Suppress Defaults
        .label_formatter(|_, _| String::new())
        .x_grid_spacer(move |_input| {
            tick_indices
                .iter()
                .map(|&value| GridMark {
                    value,
                    step_size: 1.0,
                })
                .collect()
        })
        .y_grid_spacer(move |_input| {
            y_ticks
                .iter()
                .map(|&value| GridMark { value, step_size })
                .collect()
        })
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(x_min..=x_max);
            plot_ui.set_plot_bounds_y(y_min..=y_max);

            let hovered = plot_ui
                .pointer_coordinate()
                .and_then(|pointer| chart.hover(pointer.x));

            let ctx = LayerContext {
                chart,
                hovered: hovered.as_ref(),
                baseline: y_min,
            };

            // Back to front
            let layers: Vec<Box<dyn PlotLayer>> = vec![
                Box::new(AreaFillLayer),
                Box::new(PriceLineLayer),
                Box::new(CrosshairLayer),
                Box::new(HoverLayer),
            ];

            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
        });
}

fn create_x_axis(chart: &ChartView) -> AxisHints<'static> {
    // The formatter outlives the borrow of `chart`
    let labels = chart.clone();
    AxisHints::new_x().formatter(move |grid_mark, _range| labels.x_axis_label(grid_mark.value))
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(|grid_mark, _range| ChartView::y_axis_label(grid_mark.value))
        .placement(HPlacement::Left)
}
