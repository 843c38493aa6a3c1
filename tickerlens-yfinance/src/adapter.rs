#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use tickerlens_core::LensError;
use yf::core::HistoryService;
use yfinance_rs as yf;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, LensError>;
}

/// Options abstraction for expirations and option chain.
#[async_trait]
pub trait YfOptions: Send + Sync {
    /// Fetch available option expiration dates.
    async fn expirations(&self, symbol: &str) -> Result<Vec<i64>, LensError>;
    /// Fetch the option chain for an optional expiration.
    async fn chain(
        &self,
        symbol: &str,
        date: Option<i64>,
    ) -> Result<yf::ticker::OptionChain, LensError>;
}

/// News abstraction for fetching articles.
#[async_trait]
pub trait YfNews: Send + Sync {
    /// Fetch news articles for a symbol.
    async fn news(&self, symbol: &str) -> Result<Vec<yf::news::NewsArticle>, LensError>;
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a `YfClient` with a cookie-enabled HTTP client and a browser user agent.
    ///
    /// # Errors
    /// Returns a connector error if either the HTTP client or the `YfClient` fails to build.
    pub fn try_new_default() -> Result<Self, LensError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| LensError::connector(crate::YfConnector::KEY.as_str(), e.to_string()))?;
        Self::try_with_reqwest_client(http)
    }

    /// Build from a caller-provided `reqwest::Client`.
    ///
    /// The client should enable a cookie store for the yfinance crumb flow.
    ///
    /// # Errors
    /// Returns a connector error if the `YfClient` cannot be constructed.
    pub fn try_with_reqwest_client(http: reqwest::Client) -> Result<Self, LensError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LensError::connector(crate::YfConnector::KEY.as_str(), e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> LensError {
    let key = crate::YfConnector::KEY.as_str();
    match e {
        yf::YfError::NotFound { .. } => LensError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            LensError::connector(key, format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => {
            LensError::connector(key, format!("server error {status}: {context}"))
        }
        yf::YfError::Status { status, .. } => {
            LensError::connector(key, format!("status {status}: {context}"))
        }
        other => LensError::connector(key, other.to_string()),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, LensError> {
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl YfOptions for RealAdapter {
    async fn expirations(&self, symbol: &str) -> Result<Vec<i64>, LensError> {
        let t = yf::ticker::Ticker::new(&self.client, symbol.to_string());
        t.options()
            .await
            .map_err(|e| map_yf_err(&e, &format!("options expirations for {symbol}")))
    }

    async fn chain(
        &self,
        symbol: &str,
        date: Option<i64>,
    ) -> Result<yf::ticker::OptionChain, LensError> {
        let t = yf::ticker::Ticker::new(&self.client, symbol.to_string());
        t.option_chain(date)
            .await
            .map_err(|e| map_yf_err(&e, &format!("option chain for {symbol}")))
    }
}

#[async_trait]
impl YfNews for RealAdapter {
    async fn news(&self, symbol: &str) -> Result<Vec<yf::news::NewsArticle>, LensError> {
        yf::news::NewsBuilder::new(&self.client, symbol)
            .fetch()
            .await
            .map_err(|e| map_yf_err(&e, &format!("news for {symbol}")))
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, LensError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, LensError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, LensError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfOptions {
    /// Build a `YfOptions` from closures (tests only).
    pub fn from_fns<FE, FC>(fe: FE, fc: FC) -> Arc<dyn YfOptions>
    where
        FE: Send + Sync + 'static + Fn(String) -> Result<Vec<i64>, LensError>,
        FC: Send
            + Sync
            + 'static
            + Fn(String, Option<i64>) -> Result<yf::ticker::OptionChain, LensError>,
    {
        struct FnOptions<FE, FC> {
            fe: FE,
            fc: FC,
        }
        #[async_trait]
        impl<FE, FC> YfOptions for FnOptions<FE, FC>
        where
            FE: Send + Sync + 'static + Fn(String) -> Result<Vec<i64>, LensError>,
            FC: Send
                + Sync
                + 'static
                + Fn(String, Option<i64>) -> Result<yf::ticker::OptionChain, LensError>,
        {
            async fn expirations(&self, symbol: &str) -> Result<Vec<i64>, LensError> {
                (self.fe)(symbol.to_string())
            }
            async fn chain(
                &self,
                symbol: &str,
                date: Option<i64>,
            ) -> Result<yf::ticker::OptionChain, LensError> {
                (self.fc)(symbol.to_string(), date)
            }
        }
        Arc::new(FnOptions { fe, fc })
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfNews {
    /// Build a `YfNews` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfNews>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<Vec<yf::news::NewsArticle>, LensError>,
    {
        struct FnNews<F>(F);
        #[async_trait]
        impl<F> YfNews for FnNews<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<Vec<yf::news::NewsArticle>, LensError>,
        {
            async fn news(&self, symbol: &str) -> Result<Vec<yf::news::NewsArticle>, LensError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnNews(f))
    }
}

/// Helper trait to split a concrete adapter into arc trait objects.
///
/// Every method defaults to an adapter that reports the capability as unsupported,
/// so test bundles only override what they exercise.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(LensError::unsupported("history")))
    }
    /// Clone as `Arc<dyn YfOptions>`.
    fn clone_arc_options(&self) -> Arc<dyn YfOptions> {
        <dyn YfOptions>::from_fns(
            |_symbol| Err(LensError::unsupported("options/expirations")),
            |_symbol, _date| Err(LensError::unsupported("options/chain")),
        )
    }
    /// Clone as `Arc<dyn YfNews>`.
    fn clone_arc_news(&self) -> Arc<dyn YfNews> {
        <dyn YfNews>::from_fn(|_s| Err(LensError::unsupported("news")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
    fn clone_arc_options(&self) -> Arc<dyn YfOptions> {
        Arc::new(self.clone()) as Arc<dyn YfOptions>
    }
    fn clone_arc_news(&self) -> Arc<dyn YfNews> {
        Arc::new(self.clone()) as Arc<dyn YfNews>
    }
}
