use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::chart::{self, ChartView};
use crate::detail::loader::LoadedAsset;
use crate::domain::AssetRecord;
use crate::error::LoadError;
use crate::utils::format_utils::{percent, usd_fixed2, usd_locale};

/// The four lines of the summary panel, in display order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, EnumIter)]
pub enum SummaryField {
    Price,
    Change24h,
    MarketCap,
    Volume,
}

impl SummaryField {
    pub fn label(self) -> &'static str {
        match self {
            SummaryField::Price => "Price",
            SummaryField::Change24h => "24h Change",
            SummaryField::MarketCap => "Market Cap",
            SummaryField::Volume => "Volume (24h)",
        }
    }

    pub fn value(self, record: &AssetRecord) -> String {
        match self {
            SummaryField::Price => usd_fixed2(record.price),
            SummaryField::Change24h => percent(record.change_24h),
            SummaryField::MarketCap => usd_locale(record.market_cap),
            SummaryField::Volume => usd_locale(record.volume),
        }
    }
}

/// Everything the detail page shows for one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub summary: Vec<(SummaryField, String)>,
    pub chart: ChartView,
    pub synthetic_history: bool,
}

impl DetailView {
    pub fn new(loaded: &LoadedAsset) -> Self {
        Self::with_chart(loaded, chart::render(&loaded.record.name, &loaded.series))
    }

    pub fn with_chart(loaded: &LoadedAsset, chart: ChartView) -> Self {
        let record = &loaded.record;
        let summary = SummaryField::iter()
            .map(|field| (field, field.value(record)))
            .collect();
        Self {
            name: record.name.clone(),
            symbol: record.symbol.clone(),
            image_url: record.image_url.clone(),
            summary,
            chart,
            synthetic_history: loaded.synthetic_history,
        }
    }
}

/// What the detail page is showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Read in flight, or the asset is unavailable and missing assets are not revealed
    Pending { symbol: String },
    /// Asset unavailable; only when missing assets are revealed
    NotFound { symbol: String },
    /// The cached record exists but is unusable
    Failed { symbol: String, message: String },
    Ready(Box<DetailView>),
}

impl DetailState {
    /// Maps a finished read onto a display state.
    ///
    /// Absent cache, unreadable cache and unknown symbol all look the same to
    /// the user: a perpetual "Loading...", unless `reveal_missing` asks for an
    /// explicit not-found message. A malformed record always surfaces its reason.
    pub fn resolve(
        symbol: &str,
        outcome: Result<LoadedAsset, LoadError>,
        reveal_missing: bool,
    ) -> Self {
        match outcome {
            Ok(loaded) => DetailState::Ready(Box::new(DetailView::new(&loaded))),
            Err(e) if e.is_missing() => {
                log::warn!("⚠️  {} unavailable: {}", symbol, e);
                if reveal_missing {
                    DetailState::NotFound {
                        symbol: symbol.to_string(),
                    }
                } else {
                    DetailState::Pending {
                        symbol: symbol.to_string(),
                    }
                }
            }
            Err(e) => {
                log::error!("{}", e);
                DetailState::Failed {
                    symbol: symbol.to_string(),
                    message: e.to_string(),
                }
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DetailState::Pending { .. })
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            DetailState::Idle => None,
            DetailState::Pending { symbol }
            | DetailState::NotFound { symbol }
            | DetailState::Failed { symbol, .. } => Some(symbol.as_str()),
            DetailState::Ready(view) => Some(view.symbol.as_str()),
        }
    }
}
