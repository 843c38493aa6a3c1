use std::sync::Arc;

use chrono::{DateTime, Utc};
use tickerlens_core::{LensConfig, LensConnector, LensError, Ticker, TickerReport};

/// Builds combined ticker reports from a single connector.
pub struct TickerLens {
    pub(crate) connector: Arc<dyn LensConnector>,
    pub(crate) cfg: LensConfig,
}

/// Builder for constructing a `TickerLens` with custom configuration.
pub struct TickerLensBuilder {
    connector: Option<Arc<dyn LensConnector>>,
    cfg: LensConfig,
}

impl Default for TickerLensBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TickerLensBuilder {
    /// Create a new builder with the default window (730 days) and news limit (5).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: LensConfig::default(),
        }
    }

    /// Set the connector that serves every step. A later call replaces an earlier one.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn LensConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Length of the trailing daily history window, in calendar days.
    #[must_use]
    pub const fn history_window_days(mut self, days: u32) -> Self {
        self.cfg.history_window_days = days;
        self
    }

    /// Maximum number of news items kept in a report.
    #[must_use]
    pub const fn news_limit(mut self, limit: usize) -> Self {
        self.cfg.news_limit = limit;
        self
    }

    /// Replace the whole configuration at once.
    #[must_use]
    pub const fn config(mut self, cfg: LensConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `TickerLens`.
    ///
    /// # Errors
    /// Returns `LensError::InvalidArg` if no connector was registered.
    pub fn build(self) -> Result<TickerLens, LensError> {
        let Some(connector) = self.connector else {
            return Err(LensError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            ));
        };
        Ok(TickerLens {
            connector,
            cfg: self.cfg,
        })
    }
}

/// Tag errors a connector returns for reasons other than provider failure.
pub(crate) fn tag_err(connector: &str, e: LensError) -> LensError {
    if e.is_provider_failure() {
        e
    } else {
        LensError::connector(connector, e.to_string())
    }
}

impl TickerLens {
    /// Start building a new `TickerLens`.
    #[must_use]
    pub fn builder() -> TickerLensBuilder {
        TickerLensBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &LensConfig {
        &self.cfg
    }

    /// Name of the connector serving requests.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    /// Build the combined report for `ticker` as of now.
    ///
    /// # Errors
    /// Returns the first error raised by the history, options or news step.
    pub async fn report(&self, ticker: &Ticker) -> Result<TickerReport, LensError> {
        self.report_at(ticker, Utc::now()).await
    }

    /// Build the combined report with the history window anchored at `now`.
    ///
    /// # Errors
    /// Returns the first error raised by the history, options or news step.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlens::core::report",
            skip(self, now),
            fields(ticker = %ticker, connector = self.connector.name()),
        )
    )]
    pub async fn report_at(
        &self,
        ticker: &Ticker,
        now: DateTime<Utc>,
    ) -> Result<TickerReport, LensError> {
        let historical_data = self.history_at(ticker, now).await?;
        let (expiration_date, options) = self.nearest_option_chain(ticker).await?;
        let news = self.news(ticker).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            bars = historical_data.len(),
            calls = options.calls.len(),
            puts = options.puts.len(),
            news = news.len(),
            %expiration_date,
            "report assembled"
        );

        Ok(TickerReport {
            historical_data,
            options,
            expiration_date,
            news,
        })
    }
}
