use eframe::egui::{
    Align, CentralPanel, Context, Frame, Key, Layout, Margin, RichText, ScrollArea, TopBottomPanel,
    Ui,
};

use crate::detail::{DetailState, DetailView};
use crate::ui::chart_plot::show_price_chart;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{card_frame, card_gap};

use super::app::CoinDetailApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl CoinDetailApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let top_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.top_panel)
            .inner_margin(Margin::symmetric(12, 8));

        let loading = self.is_loading();
        let signature = self.loader.as_ref().map(|loader| loader.store_signature());
        let mut requested = None;

        TopBottomPanel::top("symbol_bar")
            .frame(top_panel_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();
                    ui.label(UI_TEXT.symbol_prompt);

                    let response = ui.text_edit_singleline(&mut self.symbol_input);
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                    if ui.button(UI_TEXT.open_button).clicked() || submitted {
                        requested = Some(self.symbol_input.clone());
                    }

                    if loading {
                        ui.spinner();
                    }

                    if let Some(signature) = signature {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label_subdued(format!("{} {}", UI_TEXT.source_prefix, signature));
                        });
                    }
                });
            });

        if let Some(symbol) = requested {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Open requested for '{}'", symbol);
            }
            self.navigate(&symbol);
        }
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(UI_CONFIG.card_margin));

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| match &self.state {
                    DetailState::Idle => {
                        ui.label_subdued(UI_TEXT.idle_hint);
                    }
                    DetailState::Pending { .. } => {
                        ui.label(RichText::new(UI_TEXT.loading).color(UI_CONFIG.colors.label));
                    }
                    DetailState::NotFound { symbol } => {
                        ui.label_error(format!("{} {:?}", UI_TEXT.not_found_prefix, symbol));
                    }
                    DetailState::Failed { message, .. } => {
                        ui.label_subheader(UI_TEXT.failed_heading);
                        ui.label_error(message.as_str());
                    }
                    DetailState::Ready(view) => render_detail(ui, view),
                });
            });
    }
}

fn render_detail(ui: &mut Ui, view: &DetailView) {
    ui.label_header(view.name.as_str());
    card_gap(ui);

    card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        for (field, value) in &view.summary {
            ui.metric(field.label(), value);
        }
    });

    card_gap(ui);

    card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.label_subheader(view.chart.title.as_str());
        if view.synthetic_history {
            ui.label_warning(UI_TEXT.synthetic_history_note);
        }
        show_price_chart(ui, &view.chart);
    });
}
