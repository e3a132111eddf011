//! Parse-and-validate boundary for the cached asset collection.
//!
//! The cache is written by something we don't control, so the array is only
//! parsed loosely up front. A record is validated when it is looked up, which
//! keeps one broken entry from hiding every other asset.

use serde_json::Value;

use crate::domain::AssetRecord;
use crate::error::LoadError;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The whole cached array, entries kept as loose JSON until looked up.
#[derive(Debug, Default, Clone)]
pub struct CachedCollection {
    entries: Vec<Value>,
}

impl CachedCollection {
    /// Parses the raw cache entry. Anything other than a JSON array is unreadable.
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let entries: Vec<Value> =
            serde_json::from_str(raw).map_err(|e| LoadError::CacheUnreadable(e.to_string()))?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_cache_reads {
            log::info!("Parsed cached collection with {} entries", entries.len());
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Symbols of every entry that has one, in cache order.
    pub fn symbols(&self) -> Vec<&str> {
        self.entries.iter().filter_map(entry_symbol).collect()
    }

    /// First entry whose `symbol` equals `symbol` exactly.
    pub fn find(&self, symbol: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry_symbol(entry) == Some(symbol))
    }

    /// Looks up and validates the record for `symbol`.
    pub fn record(&self, symbol: &str) -> Result<AssetRecord, LoadError> {
        let Some(entry) = self.find(symbol) else {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_cache_reads {
                log::info!("{} not cached; available: {:?}", symbol, self.symbols());
            }
            return Err(LoadError::RecordNotFound(symbol.to_string()));
        };
        validate_entry(symbol, entry.clone())
    }
}

fn entry_symbol(entry: &Value) -> Option<&str> {
    entry.get("symbol").and_then(Value::as_str)
}

/// Turns one loose entry into a typed record and enforces the record invariants.
pub fn validate_entry(symbol: &str, entry: Value) -> Result<AssetRecord, LoadError> {
    let malformed = |reason: String| LoadError::MalformedCacheEntry {
        symbol: symbol.to_string(),
        reason,
    };

    let mut record: AssetRecord =
        serde_json::from_value(entry).map_err(|e| malformed(e.to_string()))?;

    let numeric = [
        ("price", record.price),
        ("volume", record.volume),
        ("marketCap", record.market_cap),
        ("change24h", record.change_24h),
    ];
    if let Some((field, _)) = numeric.iter().find(|(_, value)| !value.is_finite()) {
        return Err(malformed(format!("{field} is not a finite number")));
    }

    // An empty array carries no usable history; treat it like a missing one.
    if record.historical_prices.as_ref().is_some_and(Vec::is_empty) {
        record.historical_prices = None;
    }

    if let Some(history) = &record.historical_prices {
        if let Some(index) = history.iter().position(|entry| !entry.price.is_finite()) {
            return Err(malformed(format!(
                "historicalPrices[{index}].price is not a finite number"
            )));
        }
        if let Some(index) = history
            .windows(2)
            .position(|pair| pair[1].time < pair[0].time)
        {
            return Err(malformed(format!(
                "historicalPrices not in chronological order at index {}",
                index + 1
            )));
        }
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLECTION: &str = r#"[
        {"id":"bitcoin","name":"Bitcoin","symbol":"BTC","price":50000,"volume":10,"marketCap":20,"change24h":1.5,"imageUrl":""},
        {"id":"ether","name":"Ether","symbol":"ETH","price":"oops","volume":10,"marketCap":20,"change24h":1.5},
        {"id":"bitcoin-2","name":"Bitcoin Again","symbol":"BTC","price":1,"volume":1,"marketCap":1,"change24h":0},
        {"id":"nameless"},
        {"id":"tiny","name":"Tiny","symbol":"btc","price":0.01,"volume":1,"marketCap":1,"change24h":0}
    ]"#;

    #[test]
    fn non_array_cache_is_unreadable() {
        assert!(matches!(
            CachedCollection::parse("{\"symbol\":\"BTC\"}"),
            Err(LoadError::CacheUnreadable(_))
        ));
        assert!(matches!(
            CachedCollection::parse("not json"),
            Err(LoadError::CacheUnreadable(_))
        ));
    }

    #[test]
    fn lookup_is_first_exact_match() {
        let collection = CachedCollection::parse(COLLECTION).unwrap();
        assert_eq!(collection.len(), 5);
        assert_eq!(collection.symbols(), vec!["BTC", "ETH", "BTC", "btc"]);

        let btc = collection.record("BTC").unwrap();
        assert_eq!(btc.id, "bitcoin");
        let lower = collection.record("btc").unwrap();
        assert_eq!(lower.id, "tiny");
        assert_eq!(
            collection.record("DOGE"),
            Err(LoadError::RecordNotFound("DOGE".to_string()))
        );
    }

    #[test]
    fn broken_entry_only_fails_its_own_lookup() {
        let collection = CachedCollection::parse(COLLECTION).unwrap();
        match collection.record("ETH") {
            Err(LoadError::MalformedCacheEntry { symbol, .. }) => assert_eq!(symbol, "ETH"),
            other => panic!("expected malformed entry, got {:?}", other),
        }
        assert!(collection.record("BTC").is_ok());
    }

    #[test]
    fn empty_history_is_treated_as_missing() {
        let entry = serde_json::json!({
            "name": "Sol", "symbol": "SOL", "price": 100.0, "volume": 1.0,
            "marketCap": 1.0, "change24h": 0.0, "historicalPrices": []
        });
        let record = validate_entry("SOL", entry).unwrap();
        assert_eq!(record.historical_prices, None);
    }

    #[test]
    fn unordered_history_is_rejected() {
        let entry = serde_json::json!({
            "name": "Sol", "symbol": "SOL", "price": 100.0, "volume": 1.0,
            "marketCap": 1.0, "change24h": 0.0,
            "historicalPrices": [
                {"time": "2024-01-05T11:00:00Z", "price": 1.0},
                {"time": "2024-01-05T10:00:00Z", "price": 2.0}
            ]
        });
        match validate_entry("SOL", entry) {
            Err(LoadError::MalformedCacheEntry { reason, .. }) => {
                assert!(reason.contains("chronological"), "{reason}")
            }
            other => panic!("expected malformed entry, got {:?}", other),
        }
    }

    #[test]
    fn repeated_timestamps_keep_their_order() {
        let entry = serde_json::json!({
            "name": "Sol", "symbol": "SOL", "price": 100.0, "volume": 1.0,
            "marketCap": 1.0, "change24h": 0.0,
            "historicalPrices": [
                {"time": "2024-01-05T10:00:00Z", "price": 1.0},
                {"time": "2024-01-05T10:00:00Z", "price": 2.0},
                {"time": "2024-01-05T11:00:00Z", "price": 3.0}
            ]
        });
        let record = validate_entry("SOL", entry).unwrap();
        let prices: Vec<f64> = record
            .historical_prices
            .unwrap()
            .iter()
            .map(|entry| entry.price)
            .collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn bad_timestamp_is_malformed() {
        let entry = serde_json::json!({
            "name": "Sol", "symbol": "SOL", "price": 100.0, "volume": 1.0,
            "marketCap": 1.0, "change24h": 0.0,
            "historicalPrices": [{"time": "yesterday", "price": 1.0}]
        });
        assert!(matches!(
            validate_entry("SOL", entry),
            Err(LoadError::MalformedCacheEntry { .. })
        ));
    }
}
