//! Synthetic price history configuration.
//!
//! Used only when a cached record carries no history of its own. The points
//! are a display placeholder and never leave memory.

use crate::utils::TimeUtils;

pub struct HistoryConfig {
    /// Number of synthesized points
    pub synthetic_points: usize,
    /// Spacing between synthesized points (ms)
    pub step_ms: i64,
    /// Half-width of the uniform jitter applied around the current price
    pub jitter: f64,
    /// Decimal places kept on each synthesized price
    pub price_decimals: u32,
}

pub const HISTORY: HistoryConfig = HistoryConfig {
    synthetic_points: 24,
    step_ms: TimeUtils::MS_IN_H,
    jitter: 0.05,
    price_decimals: 3,
};
