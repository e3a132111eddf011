use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::collection::CachedCollection;
use crate::domain::AssetRecord;
use crate::error::LoadError;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Read-only access to the cached asset collection.
///
/// Implementations only fetch the raw entry; parsing happens once, in [`CollectionStore::read`].
pub trait CollectionStore: Send + Sync {
    /// The raw JSON entry, `None` when nothing has been cached yet.
    fn read_raw(&self) -> Result<Option<String>>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;

    fn read(&self) -> Result<CachedCollection, LoadError> {
        let raw = match self.read_raw() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Err(LoadError::CacheAbsent),
            Err(e) => {
                log::warn!("⚠️  {} read failed: {:#}", self.signature(), e);
                return Err(LoadError::CacheUnreadable(format!("{:#}", e)));
            }
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_cache_reads {
            log::info!("{} returned {} bytes", self.signature(), raw.len());
        }

        CachedCollection::parse(&raw)
    }
}

/// Native stand-in for browser local storage: one JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `records` as a JSON array, creating parent directories as needed.
    pub fn write_records(&self, records: &[AssetRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .context(format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        let json = serde_json::to_string_pretty(records).context("Failed to serialize records")?;
        fs::write(&self.path, json)
            .context(format!("Failed to write cache file: {}", self.path.display()))
    }
}

impl CollectionStore for JsonFileStore {
    fn read_raw(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .context(format!("Failed to open cache file: {:?}", self.path))?;
        Ok(Some(raw))
    }

    fn signature(&self) -> &'static str {
        "JSON File Cache"
    }
}

/// In-memory fixture store.
#[derive(Default, Clone)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    /// A store with nothing cached.
    pub fn empty() -> Self {
        Self { raw: None }
    }

    pub fn from_json(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn from_records(records: &[AssetRecord]) -> Result<Self> {
        let raw = serde_json::to_string(records).context("Failed to serialize records")?;
        Ok(Self::from_json(raw))
    }
}

impl CollectionStore for MemoryStore {
    fn read_raw(&self) -> Result<Option<String>> {
        Ok(self.raw.clone())
    }

    fn signature(&self) -> &'static str {
        "In-Memory Cache"
    }
}
