use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    /// Background of the summary and chart cards
    pub card: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub card_corner_radius: u8,
    pub card_margin: i8,
    pub heading_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::WHITE,
        heading: Color32::WHITE,
        subsection_heading: Color32::WHITE,
        central_panel: Color32::BLACK,
        top_panel: Color32::from_rgb(17, 17, 17),
        card: Color32::from_rgb(17, 24, 39), // gray-900
    },
    card_corner_radius: 8,
    card_margin: 24,
    heading_size: 30.0,
};
