use chrono::NaiveDate;
use tickerlens_core::timestamp::expiration_date;
use tickerlens_core::{LensError, OptionChain, Ticker};

use crate::TickerLens;
use crate::core::tag_err;

impl TickerLens {
    /// List option expirations (UTC epoch seconds) in provider order.
    ///
    /// # Errors
    /// Returns `Unsupported` if the connector has no expirations capability, or the
    /// connector's error.
    pub async fn options_expirations(&self, ticker: &Ticker) -> Result<Vec<i64>, LensError> {
        let provider = self
            .connector
            .as_options_expirations_provider()
            .ok_or_else(|| LensError::unsupported("options/expirations"))?;
        provider
            .options_expirations(ticker)
            .await
            .map_err(|e| tag_err(self.connector.name(), e))
    }

    /// Fetch the chain for one expiration (UTC epoch seconds).
    ///
    /// # Errors
    /// Returns `Unsupported` if the connector has no chain capability, or the
    /// connector's error.
    pub async fn option_chain(
        &self,
        ticker: &Ticker,
        expiration: i64,
    ) -> Result<OptionChain, LensError> {
        let provider = self
            .connector
            .as_option_chain_provider()
            .ok_or_else(|| LensError::unsupported("options/chain"))?;
        provider
            .option_chain(ticker, expiration)
            .await
            .map_err(|e| tag_err(self.connector.name(), e))
    }

    /// Chain for the first listed expiration, with that expiration as a UTC date.
    ///
    /// The provider lists expirations ascending, so the first is the nearest.
    ///
    /// # Errors
    /// Returns `NoOptionsData` when no expirations are listed, or any error from
    /// the expiration and chain lookups.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerlens::steps::options",
            skip(self),
            fields(ticker = %ticker),
        )
    )]
    pub async fn nearest_option_chain(
        &self,
        ticker: &Ticker,
    ) -> Result<(NaiveDate, OptionChain), LensError> {
        let expirations = self.options_expirations(ticker).await?;
        let Some(&nearest) = expirations.first() else {
            return Err(LensError::no_options_data(ticker.as_str()));
        };
        let date = expiration_date(nearest)?;
        let chain = self.option_chain(ticker, nearest).await?;
        Ok((date, chain))
    }
}
