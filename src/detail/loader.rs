use std::sync::Arc;

use rand::Rng;

use crate::config::HISTORY;
use crate::data::CollectionStore;
use crate::domain::{AssetRecord, HistoricalPrice, TimeSeriesPoint};
use crate::error::LoadError;
use crate::utils::maths_utils::round_to_decimals;
use crate::utils::time_utils::{epoch_ms_to_datetime, utc_now_as_timestamp_ms};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Source of "now" for synthesized history.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        utc_now_as_timestamp_ms()
    }
}

/// A clock frozen at one instant.
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

/// A resolved asset, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedAsset {
    pub record: AssetRecord,
    pub series: Vec<TimeSeriesPoint>,
    /// History was generated locally, not read from the cache
    pub synthetic_history: bool,
}

/// Reads the cache and finds the first record whose symbol equals `symbol` (case-sensitive).
pub fn load(store: &dyn CollectionStore, symbol: &str) -> Result<AssetRecord, LoadError> {
    store.read()?.record(symbol)
}

/// Placeholder history: one point per hour, oldest first, ending at `now_ms`.
///
/// Each price is `price` plus uniform jitter in `[-0.05, 0.05)`, rounded to 3
/// decimals. Display filler only; it says nothing about the market.
///
/// `None` when any of the hourly timestamps falls outside the representable range.
pub fn synthesize_history<R: Rng>(
    price: f64,
    now_ms: i64,
    rng: &mut R,
) -> Option<Vec<HistoricalPrice>> {
    let count = HISTORY.synthetic_points as i64;
    (0..count)
        .rev()
        .map(|hours_ago| {
            let time = now_ms
                .checked_sub(hours_ago * HISTORY.step_ms)
                .and_then(epoch_ms_to_datetime)?;
            let jitter = rng.gen_range(-HISTORY.jitter..HISTORY.jitter);
            let price = round_to_decimals(price + jitter, HISTORY.price_decimals);
            Some(HistoricalPrice::new(time, price))
        })
        .collect()
}

/// Returns the record unchanged when it has history, otherwise with synthesized history.
///
/// If no history can be synthesized for `now_ms` the record keeps none.
pub fn ensure_history<R: Rng>(
    mut record: AssetRecord,
    now_ms: i64,
    rng: &mut R,
) -> AssetRecord {
    if record.has_history() {
        return record;
    }

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_history_synthesis {
        log::info!(
            "No cached history for {}; synthesizing {} placeholder points",
            record.symbol,
            HISTORY.synthetic_points
        );
    }

    match synthesize_history(record.price, now_ms, rng) {
        Some(history) => record.historical_prices = Some(history),
        None => log::warn!(
            "Clock reading {} is out of range; {} keeps no history",
            now_ms,
            record.symbol
        ),
    }
    record
}

/// Epoch-millisecond series in history order. Empty when there is no history.
pub fn to_series(record: &AssetRecord) -> Vec<TimeSeriesPoint> {
    record
        .historical_prices
        .iter()
        .flatten()
        .map(TimeSeriesPoint::from)
        .collect()
}

/// Store + clock bundle that runs the whole read → lookup → normalize sequence.
#[derive(Clone)]
pub struct DetailLoader {
    store: Arc<dyn CollectionStore>,
    clock: Arc<dyn Clock>,
}

impl DetailLoader {
    pub fn new(store: Arc<dyn CollectionStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn with_system_clock(store: Arc<dyn CollectionStore>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }

    pub fn store_signature(&self) -> &'static str {
        self.store.signature()
    }

    pub fn open<R: Rng>(
        &self,
        symbol: &str,
        rng: &mut R,
    ) -> Result<LoadedAsset, LoadError> {
        let record = load(self.store.as_ref(), symbol)?;
        let synthetic_history = !record.has_history();
        let record = ensure_history(record, self.clock.now_ms(), rng);
        let series = to_series(&record);
        Ok(LoadedAsset {
            record,
            series,
            synthetic_history,
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStore;
    use chrono::DateTime;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // 2024-01-05T12:00:00Z
    const NOW: i64 = 1_704_456_000_000;

    fn bitcoin() -> AssetRecord {
        AssetRecord {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            price: 50_000.0,
            volume: 35_000_000_000.0,
            market_cap: 980_000_000_000.0,
            change_24h: 2.5,
            image_url: String::new(),
            historical_prices: None,
        }
    }

    fn loader(records: &[AssetRecord]) -> DetailLoader {
        let store = MemoryStore::from_records(records).unwrap();
        DetailLoader::new(Arc::new(store), Arc::new(FixedClock(NOW)))
    }

    #[test]
    fn synthesized_history_is_hourly_and_ends_now() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = synthesize_history(50_000.0, NOW, &mut rng).unwrap();
        assert_eq!(history.len(), 24);
        assert_eq!(history[23].time.timestamp_millis(), NOW);
        assert_eq!(history[0].time.timestamp_millis(), NOW - 23 * 3_600_000);
        assert!(history.windows(2).all(|w| w[1].time > w[0].time));
        for entry in &history {
            assert!((49_999.95..=50_000.05).contains(&entry.price), "{}", entry.price);
            assert_eq!(round_to_decimals(entry.price, 3), entry.price);
        }
    }

    #[test]
    fn same_seed_same_history() {
        let a = synthesize_history(10.0, NOW, &mut StdRng::seed_from_u64(42));
        let b = synthesize_history(10.0, NOW, &mut StdRng::seed_from_u64(42));
        let c = synthesize_history(10.0, NOW, &mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn out_of_range_clock_yields_no_history() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(synthesize_history(1.0, i64::MAX, &mut rng), None);
        assert_eq!(synthesize_history(1.0, i64::MIN, &mut rng), None);

        let out = ensure_history(bitcoin(), i64::MAX, &mut rng);
        assert_eq!(out.historical_prices, None);
        assert!(to_series(&out).is_empty());
    }

    #[test]
    fn existing_history_is_left_alone() {
        let mut record = bitcoin();
        let time = DateTime::from_timestamp_millis(NOW).unwrap();
        record.historical_prices = Some(vec![HistoricalPrice::new(time, 1.0)]);
        let out = ensure_history(record.clone(), NOW, &mut StdRng::seed_from_u64(1));
        assert_eq!(out, record);
    }

    #[test]
    fn bitcoin_without_history_gets_placeholder_series() {
        let loaded = loader(&[bitcoin()])
            .open("BTC", &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert!(loaded.synthetic_history);
        assert_eq!(loaded.series.len(), 24);
        assert!(
            loaded
                .series
                .iter()
                .all(|p| (49_997.5..=50_002.5).contains(&p.price))
        );
        assert!(
            loaded
                .series
                .windows(2)
                .all(|w| w[1].timestamp_ms > w[0].timestamp_ms)
        );
    }

    #[test]
    fn cached_history_is_not_synthetic() {
        let mut record = bitcoin();
        let time = DateTime::from_timestamp_millis(NOW).unwrap();
        record.historical_prices = Some(vec![HistoricalPrice::new(time, 49_000.0)]);
        let loaded = loader(&[record])
            .open("BTC", &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert!(!loaded.synthetic_history);
        assert_eq!(loaded.series, vec![TimeSeriesPoint::new(NOW, 49_000.0)]);
    }

    #[test]
    fn missing_symbol_and_missing_cache() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            loader(&[bitcoin()]).open("DOGE", &mut rng),
            Err(LoadError::RecordNotFound("DOGE".to_string()))
        );
        assert_eq!(
            loader(&[bitcoin()]).open("btc", &mut rng),
            Err(LoadError::RecordNotFound("btc".to_string()))
        );
        let empty = DetailLoader::new(Arc::new(MemoryStore::empty()), Arc::new(FixedClock(NOW)));
        assert_eq!(empty.open("BTC", &mut rng), Err(LoadError::CacheAbsent));
    }

    #[test]
    fn load_returns_first_match() {
        let mut second = bitcoin();
        second.id = "wrapped".to_string();
        let store = MemoryStore::from_records(&[bitcoin(), second]).unwrap();
        assert_eq!(load(&store, "BTC").unwrap().id, "bitcoin");
    }

    proptest! {
        #[test]
        fn to_series_preserves_order_and_length(
            prices in proptest::collection::vec(0.0f64..1e6, 1..100),
        ) {
            let mut record = bitcoin();
            let history: Vec<HistoricalPrice> = prices
                .iter()
                .enumerate()
                .map(|(i, &price)| {
                    let time = DateTime::from_timestamp_millis(NOW + i as i64 * 60_000).unwrap();
                    HistoricalPrice::new(time, price)
                })
                .collect();
            record.historical_prices = Some(history.clone());

            let series = to_series(&record);
            prop_assert_eq!(series.len(), history.len());
            for (point, entry) in series.iter().zip(&history) {
                prop_assert_eq!(point.timestamp_ms, entry.time.timestamp_millis());
                prop_assert_eq!(point.price, entry.price);
            }
        }
    }
}
