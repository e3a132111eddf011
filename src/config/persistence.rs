//! Cache location and app state persistence configuration

/// Where the cached asset collection lives
pub struct CacheLocation {
    /// Key of the local storage entry holding the JSON array (wasm32)
    pub storage_key: &'static str,
    /// Directory for the native stand-in of local storage
    pub directory: &'static str,
    /// File extension for the native cache file
    pub extension: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub cache: CacheLocation,
    /// Path for saving/loading application UI state (native only)
    pub app_state_path: &'static str,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    cache: CacheLocation {
        storage_key: "cryptoData",
        directory: "cache",
        extension: "json",
    },
    app_state_path: ".states.json",
};

/// Default native cache file, e.g. "cache/cryptoData.json"
pub fn default_cache_filename() -> String {
    format!(
        "{}/{}.{}",
        PERSISTENCE.cache.directory, PERSISTENCE.cache.storage_key, PERSISTENCE.cache.extension
    )
}
