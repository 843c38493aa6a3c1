//! Projection from yfinance-rs records into tickerlens entities.

use paft::money::Money;
use rust_decimal::prelude::ToPrimitive;
use tickerlens_core::{HistoricalBar, LensError, NewsItem, OptionChain, OptionContract};
use yfinance_rs as yf;

fn money_to_f64(m: &Money, field: &str) -> Result<f64, LensError> {
    m.amount()
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LensError::data(format!("{field} is not representable as f64")))
}

/// Project one provider candle into a daily bar. Missing volume becomes `0`.
pub fn bar_from_candle(c: &yf::Candle) -> Result<HistoricalBar, LensError> {
    Ok(HistoricalBar {
        date: c.ts,
        open: money_to_f64(&c.open, "open")?,
        high: money_to_f64(&c.high, "high")?,
        low: money_to_f64(&c.low, "low")?,
        close: money_to_f64(&c.close, "close")?,
        volume: c.volume.unwrap_or(0),
    })
}

/// Keep strike, last price, volume, open interest and implied volatility; drop the rest.
pub fn contract_from_yf(c: &yf::ticker::OptionContract) -> Result<OptionContract, LensError> {
    Ok(OptionContract {
        strike: money_to_f64(&c.strike, "strike")?,
        last_price: c
            .price
            .as_ref()
            .map(|p| money_to_f64(p, "lastPrice"))
            .transpose()?,
        volume: c.volume.and_then(|v| u64::try_from(v).ok()),
        open_interest: c.open_interest.and_then(|v| u64::try_from(v).ok()),
        implied_volatility: c.implied_volatility.filter(|v| v.is_finite()),
    })
}

/// Project a full chain, preserving provider order.
pub fn chain_from_yf(chain: &yf::ticker::OptionChain) -> Result<OptionChain, LensError> {
    Ok(OptionChain {
        calls: chain
            .calls
            .iter()
            .map(contract_from_yf)
            .collect::<Result<_, _>>()?,
        puts: chain
            .puts
            .iter()
            .map(contract_from_yf)
            .collect::<Result<_, _>>()?,
    })
}

/// Project a news article; the publish time is already UTC.
#[must_use]
pub fn news_from_yf(a: yf::news::NewsArticle) -> NewsItem {
    NewsItem {
        title: a.title,
        publisher: a.publisher.map(|p| p.to_string()),
        link: a.link.map(|l| l.to_string()),
        published_utc: a.published_at,
    }
}
