// Cached asset collection: storage backends and the parse/validate boundary
pub mod collection;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod store;

// Re-export commonly used types
pub use collection::CachedCollection;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use store::{CollectionStore, JsonFileStore, MemoryStore};
