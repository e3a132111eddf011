use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text.
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" line with a bold label, as in the summary card.
    fn metric(&mut self, label: &str, value: &str);

    /// Renders a page heading (asset name).
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a card heading using the configured global color.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a warning/info message (Yellow/Gold).
    fn label_warning(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 6.0;
            ui.label(
                RichText::new(format!("{}:", label))
                    .size(18.0)
                    .strong()
                    .color(UI_CONFIG.colors.label),
            );
            ui.label(RichText::new(value).size(18.0).color(UI_CONFIG.colors.label));
        });
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(UI_CONFIG.heading_size)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(18.0)
                .strong()
                .color(UI_CONFIG.colors.subsection_heading),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(Color32::from_rgb(255, 100, 100)));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::from_rgb(255, 215, 0)));
    }
}
