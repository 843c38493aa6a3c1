use chrono::{DateTime, Utc};
use tickerlens_core::{HistoricalBar, HistoryWindow, LensError, Ticker};

use crate::TickerLens;
use crate::core::tag_err;

impl TickerLens {
    /// Trailing window ending at today's UTC midnight, sized by `history_window_days`.
    #[must_use]
    pub fn history_window(&self, now: DateTime<Utc>) -> HistoryWindow {
        HistoryWindow::trailing(self.cfg.history_window_days, now)
    }

    /// Fetch daily bars over the configured trailing window ending today.
    ///
    /// # Errors
    /// Returns `Unsupported` if the connector has no history capability, or the
    /// connector's error.
    pub async fn history(&self, ticker: &Ticker) -> Result<Vec<HistoricalBar>, LensError> {
        self.history_at(ticker, Utc::now()).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlens::steps::history",
            skip(self, now),
            fields(ticker = %ticker),
        )
    )]
    pub(crate) async fn history_at(
        &self,
        ticker: &Ticker,
        now: DateTime<Utc>,
    ) -> Result<Vec<HistoricalBar>, LensError> {
        let provider = self
            .connector
            .as_history_provider()
            .ok_or_else(|| LensError::unsupported("history"))?;
        provider
            .history(ticker, self.history_window(now))
            .await
            .map_err(|e| tag_err(self.connector.name(), e))
    }
}
