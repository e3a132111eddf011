use serde::{Deserialize, Serialize};

use crate::domain::asset::HistoricalPrice;

/// A (timestamp, price) pair as consumed by the chart.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    /// Epoch milliseconds
    pub timestamp_ms: i64,
    pub price: f64,
}

impl TimeSeriesPoint {
    pub fn new(timestamp_ms: i64, price: f64) -> Self {
        Self {
            timestamp_ms,
            price,
        }
    }
}

impl From<&HistoricalPrice> for TimeSeriesPoint {
    fn from(entry: &HistoricalPrice) -> Self {
        Self::new(entry.time.timestamp_millis(), entry.price)
    }
}
