//! Deterministic connectors for tests and offline runs.
//!
//! `MockConnector` serves static fixtures for a handful of symbols; a few
//! reserved symbols trigger failure paths:
//!
//! - `FAIL`: every capability returns a connector error.
//! - `NOOPT`: history and news succeed, the expiration list is empty.
//! - `EMPTY`: history is empty, the expiration list is empty.
//!
//! `DynamicMockConnector` defers every call to rules set through its controller.

use async_trait::async_trait;
use tickerlens_core::connector::{
    HistoryProvider, LensConnector, NewsProvider, OptionChainProvider, OptionsExpirationsProvider,
};
use tickerlens_core::{HistoricalBar, HistoryWindow, LensError, NewsItem, OptionChain, Ticker};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior, MockCall};

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name used in error tags.
    pub const NAME: &'static str = "tickerlens-mock";

    /// Create the fixture-backed connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> LensError {
        LensError::not_found(what.to_string())
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), LensError> {
        match symbol {
            "FAIL" => Err(LensError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            _ => Ok(()),
        }
    }
}

impl LensConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn vendor(&self) -> &'static str {
        "Mock"
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

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        ticker: &Ticker,
        _window: HistoryWindow,
    ) -> Result<Vec<HistoricalBar>, LensError> {
        let s = ticker.as_str();
        Self::maybe_fail(s, "history")?;
        fixtures::history::by_symbol(s).ok_or_else(|| Self::not_found(&format!("history for {s}")))
    }
}

#[async_trait]
impl OptionsExpirationsProvider for MockConnector {
    async fn options_expirations(&self, ticker: &Ticker) -> Result<Vec<i64>, LensError> {
        let s = ticker.as_str();
        Self::maybe_fail(s, "options/expirations")?;
        fixtures::options::expirations_by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("options expirations for {s}")))
    }
}

#[async_trait]
impl OptionChainProvider for MockConnector {
    async fn option_chain(
        &self,
        ticker: &Ticker,
        expiration: i64,
    ) -> Result<OptionChain, LensError> {
        let s = ticker.as_str();
        Self::maybe_fail(s, "options/chain")?;
        fixtures::options::chain_by_symbol_and_date(s, expiration)
            .ok_or_else(|| Self::not_found(&format!("option chain for {s}")))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, ticker: &Ticker) -> Result<Vec<NewsItem>, LensError> {
        let s = ticker.as_str();
        Self::maybe_fail(s, "news")?;
        fixtures::news::by_symbol(s).ok_or_else(|| Self::not_found(&format!("news for {s}")))
    }
}
