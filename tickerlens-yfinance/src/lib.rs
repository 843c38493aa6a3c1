//! tickerlens-yfinance
//!
//! Connector that implements `LensConnector` on top of the `yfinance-rs`
//! client library. Exposes daily history, option expirations and chains,
//! and news, each projected into `tickerlens-core` entities.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;
mod convert;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YfHistory, YfNews, YfOptions};
use async_trait::async_trait;
use paft::market::requests::history::Interval;
use tickerlens_core::{
    HistoricalBar, HistoryWindow, LensError, NewsItem, OptionChain, Ticker,
    connector::{
        ConnectorKey, HistoryProvider, LensConnector, NewsProvider, OptionChainProvider,
        OptionsExpirationsProvider,
    },
};

/// Public connector type. Production users construct it with `YfConnector::try_new_default()`.
pub struct YfConnector {
    history: Arc<dyn YfHistory>,
    options: Arc<dyn YfOptions>,
    news: Arc<dyn YfNews>,
}

impl YfConnector {
    /// Static connector key used to tag errors and log lines.
    pub const KEY: ConnectorKey = ConnectorKey::new("tickerlens-yfinance");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: LensError, what: &str) -> LensError {
        match e {
            LensError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    LensError::not_found(what.to_string())
                } else {
                    LensError::connector(Self::KEY.as_str(), msg)
                }
            }
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns a connector error if the HTTP client cannot be constructed.
    pub fn try_new_default() -> Result<Self, LensError> {
        let a = RealAdapter::try_new_default()?;
        Ok(Self::from_adapter(&a))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yfinance_rs::YfClient) -> Self {
        let a = RealAdapter::new(client);
        Self::from_adapter(&a)
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// Note: The provided client should enable a cookie store for yfinance auth/crumb flow.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed from the provided HTTP client.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, LensError> {
        let a = RealAdapter::try_with_reqwest_client(http)?;
        Ok(Self::from_adapter(&a))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            options: adapter.clone_arc_options(),
            news: adapter.clone_arc_news(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            history: Arc::clone(&shared) as Arc<dyn YfHistory>,
            options: Arc::clone(&shared) as Arc<dyn YfOptions>,
            news: shared as Arc<dyn YfNews>,
        }
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlens_yfinance::history",
            skip(self),
            fields(ticker = %ticker, days = window.days()),
        )
    )]
    async fn history(
        &self,
        ticker: &Ticker,
        window: HistoryWindow,
    ) -> Result<Vec<HistoricalBar>, LensError> {
        let yf_req = yfinance_rs::core::services::HistoryRequest {
            range: None,
            period: Some(window.as_epoch_period()),
            interval: Interval::D1,
            include_prepost: false,
            include_actions: false,
            auto_adjust: true,
            keepna: false,
        };
        let symbol = ticker.as_str();
        let raw = self
            .history
            .fetch_full(symbol, yf_req)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))?;
        raw.candles.iter().map(convert::bar_from_candle).collect()
    }
}

#[async_trait]
impl OptionsExpirationsProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlens_yfinance::options_expirations",
            skip(self),
            fields(ticker = %ticker),
        )
    )]
    async fn options_expirations(&self, ticker: &Ticker) -> Result<Vec<i64>, LensError> {
        let symbol = ticker.as_str();
        self.options
            .expirations(symbol)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("options expirations for {symbol}")))
    }
}

#[async_trait]
impl OptionChainProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlens_yfinance::option_chain",
            skip(self),
            fields(ticker = %ticker, expiration = expiration),
        )
    )]
    async fn option_chain(
        &self,
        ticker: &Ticker,
        expiration: i64,
    ) -> Result<OptionChain, LensError> {
        let symbol = ticker.as_str();
        let raw = self
            .options
            .chain(symbol, Some(expiration))
            .await
            .map_err(|e| Self::normalize_error(e, &format!("option chain for {symbol}")))?;
        convert::chain_from_yf(&raw)
    }
}

#[async_trait]
impl NewsProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlens_yfinance::news",
            skip(self),
            fields(ticker = %ticker),
        )
    )]
    async fn news(&self, ticker: &Ticker) -> Result<Vec<NewsItem>, LensError> {
        let symbol = ticker.as_str();
        let articles = self
            .news
            .news(symbol)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("news for {symbol}")))?;
        Ok(articles.into_iter().map(convert::news_from_yf).collect())
    }
}

impl LensConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_options_expirations_provider(&self) -> Option<&dyn OptionsExpirationsProvider> {
        Some(self as &dyn OptionsExpirationsProvider)
    }

    fn as_option_chain_provider(&self) -> Option<&dyn OptionChainProvider> {
        Some(self as &dyn OptionChainProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}
