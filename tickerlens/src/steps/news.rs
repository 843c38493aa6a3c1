use tickerlens_core::{LensError, NewsItem, Ticker};

use crate::TickerLens;
use crate::core::tag_err;

impl TickerLens {
    /// Most recent news, in provider order, capped at `news_limit` items.
    ///
    /// # Errors
    /// Returns `Unsupported` if the connector has no news capability, or the
    /// connector's error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlens::steps::news",
            skip(self),
            fields(ticker = %ticker, limit = self.cfg.news_limit),
        )
    )]
    pub async fn news(&self, ticker: &Ticker) -> Result<Vec<NewsItem>, LensError> {
        let provider = self
            .connector
            .as_news_provider()
            .ok_or_else(|| LensError::unsupported("news"))?;
        let mut items = provider
            .news(ticker)
            .await
            .map_err(|e| tag_err(self.connector.name(), e))?;
        items.truncate(self.cfg.news_limit);
        Ok(items)
    }
}
