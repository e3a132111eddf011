// Domain types and value objects
pub mod asset;
pub mod time_series;

// Re-export commonly used types
pub use asset::{AssetRecord, HistoricalPrice};
pub use time_series::TimeSeriesPoint;
