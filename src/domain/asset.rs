use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::time_utils::parse_iso8601_utc;

/// One entry of a record's price history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoricalPrice {
    /// ISO-8601 on the wire; written back as RFC 3339
    #[serde(deserialize_with = "deserialize_iso8601")]
    pub time: DateTime<Utc>,
    pub price: f64,
}

impl HistoricalPrice {
    pub fn new(time: DateTime<Utc>, price: f64) -> Self {
        Self { time, price }
    }
}

fn deserialize_iso8601<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso8601_utc(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 timestamp {:?}", raw)))
}

/// A single asset's cached snapshot plus optional price history.
///
/// Field names follow the camelCase JSON written by whatever populates the cache.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Lookup key within the cached collection (case-sensitive)
    pub symbol: String,
    /// Current price, USD
    pub price: f64,
    pub volume: f64,
    pub market_cap: f64,
    /// Percentage
    #[serde(rename = "change24h")]
    pub change_24h: f64,
    #[serde(default)]
    pub image_url: String,
    /// Oldest first. `None` when the cache carries no history for this asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_prices: Option<Vec<HistoricalPrice>>,
}

impl AssetRecord {
    pub fn has_history(&self) -> bool {
        self.historical_prices
            .as_ref()
            .is_some_and(|history| !history.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_fields() {
        let json = r#"{
            "id": "bitcoin",
            "name": "Bitcoin",
            "symbol": "BTC",
            "price": 50000,
            "volume": 1200000.5,
            "marketCap": 980000000000,
            "change24h": -1.25,
            "imageUrl": "https://example.com/btc.png",
            "historicalPrices": [
                { "time": "2024-01-05T10:00:00.000Z", "price": 49900.5 },
                { "time": "2024-01-05T11:00:00.000Z", "price": 50010.0 }
            ]
        }"#;
        let record: AssetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.symbol, "BTC");
        assert_eq!(record.market_cap, 980_000_000_000.0);
        assert_eq!(record.change_24h, -1.25);
        let history = record.historical_prices.as_ref().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].time.timestamp_millis(), 1_704_448_800_000);
        assert!(record.has_history());
    }

    #[test]
    fn missing_or_null_history_is_none() {
        let base = r#""name":"Ether","symbol":"ETH","price":1,"volume":2,"marketCap":3,"change24h":4"#;
        let absent: AssetRecord = serde_json::from_str(&format!("{{{base}}}")).unwrap();
        let null: AssetRecord =
            serde_json::from_str(&format!("{{{base},\"historicalPrices\":null}}")).unwrap();
        assert_eq!(absent.historical_prices, None);
        assert_eq!(null.historical_prices, None);
        assert!(absent.id.is_empty());
        assert!(!absent.has_history());
    }

    #[test]
    fn offsetless_history_times_read_as_utc() {
        let json = r#"{"name":"Ether","symbol":"ETH","price":1,"volume":2,"marketCap":3,"change24h":4,
            "historicalPrices":[{"time":"2024-01-05","price":1},{"time":"2024-01-05T10:00:00","price":2}]}"#;
        let record: AssetRecord = serde_json::from_str(json).unwrap();
        let history = record.historical_prices.unwrap();
        assert_eq!(history[0].time.timestamp_millis(), 1_704_412_800_000);
        assert_eq!(history[1].time.timestamp_millis(), 1_704_448_800_000);
    }
}
