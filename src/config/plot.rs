//! Price chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Price line colour (amber)
    pub line_color: Color32,
    /// Area fill under the price line (amber at 10% opacity, premultiplied)
    pub fill_color: Color32,
    /// Width of the price line
    pub line_width: f32,
    /// Crosshair guide colour (white at 20% opacity, premultiplied)
    pub crosshair_color: Color32,
    pub crosshair_width: f32,
    /// Marker radius at rest (0 = hidden)
    pub point_radius: f32,
    /// Marker radius when the point is hovered
    pub point_hover_radius: f32,
    /// Upper bound on visible x-axis labels, whatever the series length
    pub max_x_ticks: usize,
    /// Spline tension (0.0 = straight segments)
    pub line_tension: f64,
    /// Polyline samples drawn per spline segment
    pub samples_per_segment: usize,
    /// Rough number of y-axis divisions; the step is rounded to a 1/2/5 multiple
    pub y_axis_divisions: usize,
    /// Fraction of the price span added above and below the curve
    pub y_padding: f64,
    /// Plot aspect ratio (width:height)
    pub plot_aspect_ratio: f32,
    pub tooltip_background: Color32,
    pub tooltip_border: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line_color: Color32::from_rgb(255, 206, 86),
    fill_color: Color32::from_rgba_premultiplied(26, 21, 9, 26),
    line_width: 2.0,
    crosshair_color: Color32::from_rgba_premultiplied(51, 51, 51, 51),
    crosshair_width: 1.0,
    point_radius: 0.0,
    point_hover_radius: 5.0,
    max_x_ticks: 10,
    line_tension: 0.3,
    samples_per_segment: 8,
    y_axis_divisions: 5,
    y_padding: 0.05,
    plot_aspect_ratio: 2.0,
    tooltip_background: Color32::from_rgb(0x22, 0x22, 0x22),
    tooltip_border: Color32::from_rgb(0x55, 0x55, 0x55),
};
