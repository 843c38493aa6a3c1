use async_trait::async_trait;

use crate::LensError;
use crate::types::{HistoricalBar, HistoryWindow, NewsItem, OptionChain, Ticker};
pub use tickerlens_types::ConnectorKey;

/// Focused role trait for connectors that provide daily OHLCV history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch one bar per trading day inside `window`, oldest first.
    async fn history(
        &self,
        ticker: &Ticker,
        window: HistoryWindow,
    ) -> Result<Vec<HistoricalBar>, LensError>;
}

/// Focused role trait for connectors that provide options expirations.
#[async_trait]
pub trait OptionsExpirationsProvider: Send + Sync {
    /// Fetch listed option expirations (UTC epoch seconds), nearest first.
    async fn options_expirations(&self, ticker: &Ticker) -> Result<Vec<i64>, LensError>;
}

/// Focused role trait for connectors that provide option chains.
#[async_trait]
pub trait OptionChainProvider: Send + Sync {
    /// Fetch the call/put chain for one expiration (UTC epoch seconds).
    async fn option_chain(
        &self,
        ticker: &Ticker,
        expiration: i64,
    ) -> Result<OptionChain, LensError>;
}

/// Focused role trait for connectors that provide news articles.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch the provider's news list for the ticker, in provider order.
    async fn news(&self, ticker: &Ticker) -> Result<Vec<NewsItem>, LensError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait LensConnector: Send + Sync {
    /// A stable identifier used in logs and error tags (e.g., "tickerlens-yfinance").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// If implemented, returns a trait object for options expirations.
    fn as_options_expirations_provider(&self) -> Option<&dyn OptionsExpirationsProvider> {
        None
    }

    /// If implemented, returns a trait object for option chains.
    fn as_option_chain_provider(&self) -> Option<&dyn OptionChainProvider> {
        None
    }

    /// If implemented, returns a trait object for news.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
}
