//! Request-scoped entities exchanged between connectors, the orchestrator and the HTTP layer.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::LensError;
use crate::timestamp;

/// A validated, non-empty ticker symbol.
///
/// Surrounding whitespace is trimmed; case is preserved as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Build a ticker from raw user input.
    ///
    /// # Errors
    /// Returns `LensError::InvalidArg` when the input is empty after trimming.
    pub fn new(raw: &str) -> Result<Self, LensError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LensError::InvalidArg("ticker symbol is empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The symbol as sent to providers.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Half-open `[start, end)` window of UTC midnights for daily history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl HistoryWindow {
    /// Window of `days` calendar days ending at the UTC midnight that starts `now`'s day.
    #[must_use]
    pub fn trailing(days: u32, now: DateTime<Utc>) -> Self {
        let end = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let start = end - Duration::days(i64::from(days));
        Self { start, end }
    }

    /// Inclusive start of the window.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end of the window.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Window bounds as UNIX epoch seconds, the form providers expect.
    #[must_use]
    pub fn as_epoch_period(&self) -> (i64, i64) {
        (self.start.timestamp(), self.end.timestamp())
    }

    /// Number of whole days covered.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// One daily OHLCV bar. Field order is the serialized column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalBar {
    /// Session timestamp.
    #[serde(with = "timestamp::iso8601")]
    pub date: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Shares traded; `0` when the provider omits it.
    pub volume: u64,
}

/// A single option contract projected to the five reported fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionContract {
    /// Strike price.
    pub strike: f64,
    /// Last traded premium.
    pub last_price: Option<f64>,
    /// Contracts traded in the session.
    pub volume: Option<u64>,
    /// Open contracts outstanding.
    pub open_interest: Option<u64>,
    /// Implied volatility as a fraction (0.35 = 35%).
    pub implied_volatility: Option<f64>,
}

/// Calls and puts for one expiration, in provider order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionChain {
    /// Call contracts.
    pub calls: Vec<OptionContract>,
    /// Put contracts.
    pub puts: Vec<OptionContract>,
}

/// A news headline for the ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline.
    pub title: String,
    /// Publishing outlet, if reported.
    pub publisher: Option<String>,
    /// Article URL, if reported.
    pub link: Option<String>,
    /// Publication time.
    #[serde(with = "timestamp::iso8601")]
    pub published_utc: DateTime<Utc>,
}

impl NewsItem {
    /// Build an item from a provider record whose publish time is epoch seconds.
    ///
    /// # Errors
    /// Returns `LensError::Data` if the epoch value is out of range.
    pub fn from_epoch(
        title: impl Into<String>,
        publisher: Option<String>,
        link: Option<String>,
        published_epoch_secs: i64,
    ) -> Result<Self, LensError> {
        Ok(Self {
            title: title.into(),
            publisher,
            link,
            published_utc: timestamp::from_epoch_seconds(published_epoch_secs)?,
        })
    }
}

/// Combined response for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerReport {
    /// Daily bars over the trailing window.
    pub historical_data: Vec<HistoricalBar>,
    /// Chain for `expiration_date`.
    pub options: OptionChain,
    /// Nearest listed expiration.
    #[serde(with = "timestamp::ymd")]
    pub expiration_date: NaiveDate,
    /// Most recent headlines, capped by configuration.
    pub news: Vec<NewsItem>,
}
