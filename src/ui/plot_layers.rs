use eframe::egui::{Color32, Frame, Id, LayerId, Margin, Order::Tooltip, RichText, Stroke, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Line, MarkerShape, PlotPoints, PlotUi, Points, Polygon, VLine};
use itertools::Itertools;

use crate::chart::{ChartView, Tooltip as ChartTooltip};
use crate::config::PLOT_CONFIG;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub chart: &'a ChartView,
    /// Shared-index hover target, if the pointer is over the plot
    pub hovered: Option<&'a ChartTooltip>,
    /// Bottom of the visible price range; the area fill reaches down to it
    pub baseline: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. AREA LAYER (fill under the curve)
// ============================================================================
pub struct AreaFillLayer;

impl PlotLayer for AreaFillLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        // One trapezoid per sampled segment: each is convex, the whole area isn't
        for (a, b) in ctx.chart.smoothed.iter().tuple_windows() {
            let points = PlotPoints::new(vec![
                [a[0], ctx.baseline],
                [b[0], ctx.baseline],
                [b[0], b[1]],
                [a[0], a[1]],
            ]);

            // Same name as the line so the legend toggles both together
            let polygon = Polygon::new(&ctx.chart.dataset_label, points)
                .fill_color(PLOT_CONFIG.fill_color)
                .stroke(Stroke::NONE);

            plot_ui.polygon(polygon);
        }
    }
}

// ============================================================================
// 2. PRICE LINE LAYER
// ============================================================================
pub struct PriceLineLayer;

impl PlotLayer for PriceLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.chart.is_empty() {
            return;
        }

        plot_ui.line(
            Line::new(
                &ctx.chart.dataset_label,
                PlotPoints::new(ctx.chart.smoothed.clone()),
            )
            .color(PLOT_CONFIG.line_color)
            .width(PLOT_CONFIG.line_width),
        );

        if PLOT_CONFIG.point_radius > 0.0 {
            plot_ui.points(
                Points::new(
                    &ctx.chart.dataset_label,
                    PlotPoints::new(ctx.chart.points.clone()),
                )
                .shape(MarkerShape::Circle)
                .radius(PLOT_CONFIG.point_radius)
                .color(PLOT_CONFIG.line_color)
                .filled(true),
            );
        }
    }
}

// ============================================================================
// 3. CROSSHAIR LAYER (x only)
// ============================================================================
pub struct CrosshairLayer;

impl PlotLayer for CrosshairLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(pointer) = plot_ui.pointer_coordinate() else {
            return;
        };
        if ctx.chart.is_empty() {
            return;
        }

        plot_ui.vline(
            VLine::new("", pointer.x)
                .color(PLOT_CONFIG.crosshair_color)
                .width(PLOT_CONFIG.crosshair_width),
        );
    }
}

// ============================================================================
// 4. HOVER LAYER (marker + tooltip)
// ============================================================================
pub struct HoverLayer;

impl PlotLayer for HoverLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(hovered) = ctx.hovered else {
            return;
        };

        plot_ui.points(
            Points::new("", PlotPoints::new(vec![hovered.point]))
                .shape(MarkerShape::Circle)
                .radius(PLOT_CONFIG.point_hover_radius)
                .color(PLOT_CONFIG.line_color)
                .filled(true),
        );

        let tooltip_layer = LayerId::new(Tooltip, Id::new("price_chart_tooltips"));

        #[allow(deprecated)]
        show_tooltip_at_pointer(
            plot_ui.ctx(),
            tooltip_layer,
            Id::new(("price_chart_tooltip", hovered.index)),
            |ui: &mut Ui| {
                Frame::new()
                    .fill(PLOT_CONFIG.tooltip_background)
                    .stroke(Stroke::new(1.0, PLOT_CONFIG.tooltip_border))
                    .inner_margin(Margin::same(6))
                    .show(ui, |ui| {
                        ui.label(RichText::new(&hovered.title).strong().color(Color32::WHITE));
                        ui.label(RichText::new(&hovered.body).color(Color32::WHITE));
                    });
            },
        );
    }
}
