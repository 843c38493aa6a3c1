use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tickerlens_core::connector::{
    HistoryProvider, LensConnector, NewsProvider, OptionChainProvider, OptionsExpirationsProvider,
};
use tickerlens_core::{HistoricalBar, HistoryWindow, LensError, NewsItem, OptionChain, Ticker};

/// Instruction for how a method should behave for a given input.
#[derive(Clone, Debug)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(LensError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

/// One recorded provider call, in the order the connector saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
    /// `history` for a symbol and window bounds (epoch seconds).
    History(String, (i64, i64)),
    /// `options_expirations` for a symbol.
    Expirations(String),
    /// `option_chain` for a symbol and expiration.
    Chain(String, i64),
    /// `news` for a symbol.
    News(String),
}

#[derive(Default)]
struct InternalState {
    history_rules: HashMap<String, MockBehavior<Vec<HistoricalBar>>>,
    expiration_rules: HashMap<String, MockBehavior<Vec<i64>>>,
    chain_rules: HashMap<String, MockBehavior<OptionChain>>,
    news_rules: HashMap<String, MockBehavior<Vec<NewsItem>>>,
    calls: Vec<MockCall>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(
        &self,
        symbol: &str,
        behavior: MockBehavior<Vec<HistoricalBar>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `options_expirations` calls for a specific symbol.
    pub async fn set_expirations_behavior(&self, symbol: &str, behavior: MockBehavior<Vec<i64>>) {
        let mut guard = self.state.lock().await;
        guard.expiration_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `option_chain` calls for a specific symbol.
    pub async fn set_chain_behavior(&self, symbol: &str, behavior: MockBehavior<OptionChain>) {
        let mut guard = self.state.lock().await;
        guard.chain_rules.insert(symbol.to_string(), behavior);
    }

    /// Set the behavior for `news` calls for a specific symbol.
    pub async fn set_news_behavior(&self, symbol: &str, behavior: MockBehavior<Vec<NewsItem>>) {
        let mut guard = self.state.lock().await;
        guard.news_rules.insert(symbol.to_string(), behavior);
    }

    /// Return a copy of the call log.
    pub async fn calls(&self) -> Vec<MockCall> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.history_rules.clear();
        guard.expiration_rules.clear();
        guard.chain_rules.clear();
        guard.news_rules.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Symbols without a rule report the capability as unsupported.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn LensConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn LensConnector>, controller)
    }

    // Log the call and snapshot the rule without holding the lock across await points.
    async fn record<T: Clone>(
        &self,
        call: MockCall,
        pick: impl FnOnce(&InternalState) -> Option<MockBehavior<T>>,
    ) -> Option<MockBehavior<T>> {
        let mut guard = self.state.lock().await;
        guard.calls.push(call);
        pick(&*guard)
    }

    async fn resolve<T>(
        behavior: Option<MockBehavior<T>>,
        capability: &'static str,
    ) -> Result<T, LensError> {
        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(LensError::unsupported(capability)),
        }
    }
}

impl LensConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
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
impl HistoryProvider for DynamicMockConnector {
    async fn history(
        &self,
        ticker: &Ticker,
        window: HistoryWindow,
    ) -> Result<Vec<HistoricalBar>, LensError> {
        let s = ticker.as_str();
        let behavior = self
            .record(MockCall::History(s.to_string(), window.as_epoch_period()), |st| {
                st.history_rules.get(s).cloned()
            })
            .await;
        Self::resolve(behavior, "history").await
    }
}

#[async_trait]
impl OptionsExpirationsProvider for DynamicMockConnector {
    async fn options_expirations(&self, ticker: &Ticker) -> Result<Vec<i64>, LensError> {
        let s = ticker.as_str();
        let behavior = self
            .record(MockCall::Expirations(s.to_string()), |st| {
                st.expiration_rules.get(s).cloned()
            })
            .await;
        Self::resolve(behavior, "options/expirations").await
    }
}

#[async_trait]
impl OptionChainProvider for DynamicMockConnector {
    async fn option_chain(
        &self,
        ticker: &Ticker,
        expiration: i64,
    ) -> Result<OptionChain, LensError> {
        let s = ticker.as_str();
        let behavior = self
            .record(MockCall::Chain(s.to_string(), expiration), |st| {
                st.chain_rules.get(s).cloned()
            })
            .await;
        Self::resolve(behavior, "options/chain").await
    }
}

#[async_trait]
impl NewsProvider for DynamicMockConnector {
    async fn news(&self, ticker: &Ticker) -> Result<Vec<NewsItem>, LensError> {
        let s = ticker.as_str();
        let behavior = self
            .record(MockCall::News(s.to_string()), |st| {
                st.news_rules.get(s).cloned()
            })
            .await;
        Self::resolve(behavior, "news").await
    }
}
