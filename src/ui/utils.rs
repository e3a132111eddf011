use eframe::egui::{Context, Frame, Margin, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.extreme_bg_color = UI_CONFIG.colors.card;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;

    ctx.set_visuals(visuals);
}

/// Rounded dark card used for the summary and the chart
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.card)
        .corner_radius(UI_CONFIG.card_corner_radius)
        .inner_margin(Margin::same(UI_CONFIG.card_margin))
}

/// Creates a vertical gap between cards
pub fn card_gap(ui: &mut Ui) {
    ui.add_space(24.0);
}
