// Detail Loader/View: cache lookup, history normalization and the detail view model
pub mod loader;
pub mod view;

pub use loader::{
    Clock, DetailLoader, FixedClock, LoadedAsset, SystemClock, ensure_history, load,
    synthesize_history, to_series,
};
pub use view::{DetailState, DetailView, SummaryField};
