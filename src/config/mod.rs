//! Configuration module for the coin detail application.

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod history;
pub mod persistence;
pub mod plot;

// Re-export commonly used items
pub use history::HISTORY;
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
