//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every check is additionally gated by
//! `cfg(debug_assertions)` at the call site.

pub struct DebugFlags {
    /// Emit cache read / lookup / validation details.
    pub print_cache_reads: bool,
    /// Emit a line when synthetic history is generated for a record.
    pub print_history_synthesis: bool,
    /// Emit UI interaction logs (e.g. navigation to a new symbol).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit chart view-model summaries (tick count, sample count).
    pub print_chart_build: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_cache_reads: false,
    print_history_synthesis: true,
    print_ui_interactions: true,
    print_state_serde: false,
    print_chart_build: false,
};
