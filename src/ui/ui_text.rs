//! User-facing strings

pub struct UiText {
    pub app_title: &'static str,
    pub symbol_prompt: &'static str,
    pub open_button: &'static str,
    pub idle_hint: &'static str,
    pub loading: &'static str,
    pub not_found_prefix: &'static str,
    pub failed_heading: &'static str,
    pub synthetic_history_note: &'static str,
    pub source_prefix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Coin Detail",
    symbol_prompt: "Symbol:",
    open_button: "Open",
    idle_hint: "Enter a symbol to view its details.",
    loading: "Loading...",
    not_found_prefix: "No cached asset with symbol",
    failed_heading: "Cached asset could not be displayed",
    synthetic_history_note: "No price history cached: chart shows placeholder data around the current price.",
    source_prefix: "Source:",
};
