use anyhow::{Context, Result};
use clap::Parser;
use coin_detail::config::persistence::default_cache_filename;
use coin_detail::utils::TimeUtils;
use coin_detail::utils::maths_utils::round_to_decimals;
use coin_detail::utils::time_utils::{
    epoch_ms_to_datetime, epoch_ms_to_utc, utc_now_as_timestamp_ms,
};
use coin_detail::{AssetRecord, HistoricalPrice, JsonFileStore};

/// Writes a small demo asset collection for the coin detail page.
#[derive(Parser, Debug)]
struct Args {
    /// Destination file
    #[arg(long, default_value_t = default_cache_filename())]
    out: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    build_demo_cache(&args.out)
}

fn build_demo_cache(out: &str) -> Result<()> {
    let now_ms = utc_now_as_timestamp_ms();
    let records = vec![
        // No history: the page synthesizes a placeholder series
        asset("bitcoin", "Bitcoin", "BTC", 50_000.0, 35_000_000_000.0, 980_000_000_000.0, 2.5),
        with_history(
            asset("ethereum", "Ethereum", "ETH", 3_000.0, 15_000_000_000.0, 360_000_000_000.0, -1.2),
            now_ms,
            48,
        )?,
        with_history(
            asset("solana", "Solana", "SOL", 150.0, 2_500_000_000.0, 68_000_000_000.0, 4.75),
            now_ms,
            72,
        )?,
    ];

    let store = JsonFileStore::new(out);
    store
        .write_records(&records)
        .with_context(|| format!("Failed to write demo cache {:?}", store.path()))?;

    println!(
        "✅ Demo cache written to {:?} with {} assets.",
        store.path(),
        records.len()
    );
    for record in &records {
        match &record.historical_prices {
            Some(history) => println!(
                "   {}: {} hourly prices up to {}",
                record.symbol,
                history.len(),
                epoch_ms_to_utc(now_ms)
            ),
            None => println!("   {}: no history (placeholder on display)", record.symbol),
        }
    }
    Ok(())
}

fn asset(
    id: &str,
    name: &str,
    symbol: &str,
    price: f64,
    volume: f64,
    market_cap: f64,
    change_24h: f64,
) -> AssetRecord {
    AssetRecord {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        volume,
        market_cap,
        change_24h,
        image_url: format!("https://assets.example.com/{}.png", id),
        historical_prices: None,
    }
}

/// Hourly history ending now: a gentle wave around the current price.
fn with_history(mut record: AssetRecord, now_ms: i64, hours: i64) -> Result<AssetRecord> {
    let history = (0..hours)
        .rev()
        .map(|hours_ago| {
            let time = epoch_ms_to_datetime(now_ms - hours_ago * TimeUtils::MS_IN_H)
                .context("History timestamp out of range")?;
            let phase = hours_ago as f64 / 6.0;
            let price = record.price * (1.0 + 0.02 * phase.sin());
            Ok(HistoricalPrice::new(time, round_to_decimals(price, 3)))
        })
        .collect::<Result<Vec<_>>>()?;
    record.historical_prices = Some(history);
    Ok(record)
}
