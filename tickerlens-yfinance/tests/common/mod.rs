#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use paft::domain::{AssetKind, Instrument};
use paft::money::{Currency, IsoCurrency, Money};
use tickerlens_yfinance::adapter;
use yfinance_rs as yf;

pub fn usd(amount: &str) -> Money {
    Money::from_canonical_str(amount, Currency::Iso(IsoCurrency::USD)).unwrap()
}

pub fn candle(ts: DateTime<Utc>, o: &str, h: &str, l: &str, c: &str, volume: Option<u64>) -> yf::Candle {
    yf::Candle {
        ts,
        open: usd(o),
        high: usd(h),
        low: usd(l),
        close: usd(c),
        close_unadj: None,
        volume,
    }
}

pub fn contract(symbol: &str, strike: &str, price: Option<&str>) -> yf::ticker::OptionContract {
    yf::ticker::OptionContract {
        instrument: Instrument::from_symbol(symbol, AssetKind::Equity).unwrap(),
        strike: usd(strike),
        price: price.map(usd),
        bid: None,
        ask: None,
        volume: Some(123),
        open_interest: Some(456),
        implied_volatility: Some(0.35),
        in_the_money: false,
        expiration_at: Some(Utc.timestamp_opt(1_725_813_600, 0).unwrap()),
        expiration_date: chrono::NaiveDate::from_ymd_opt(2024, 9, 8).unwrap(),
        greeks: None,
        last_trade_at: None,
    }
}

/// Bundles injected adapters; anything left as `None` reports unsupported.
#[derive(Default)]
pub struct Combo {
    pub h: Option<Arc<dyn adapter::YfHistory>>,
    pub o: Option<Arc<dyn adapter::YfOptions>>,
    pub n: Option<Arc<dyn adapter::YfNews>>,
}

impl adapter::CloneArcAdapters for Combo {
    fn clone_arc_history(&self) -> Arc<dyn adapter::YfHistory> {
        self.h.clone().unwrap_or_else(|| {
            <dyn adapter::YfHistory>::from_fn(|_, _| {
                Err(tickerlens_core::LensError::unsupported("history"))
            })
        })
    }
    fn clone_arc_options(&self) -> Arc<dyn adapter::YfOptions> {
        self.o.clone().unwrap_or_else(|| {
            <dyn adapter::YfOptions>::from_fns(
                |_| Err(tickerlens_core::LensError::unsupported("options/expirations")),
                |_, _| Err(tickerlens_core::LensError::unsupported("options/chain")),
            )
        })
    }
    fn clone_arc_news(&self) -> Arc<dyn adapter::YfNews> {
        self.n.clone().unwrap_or_else(|| {
            <dyn adapter::YfNews>::from_fn(|_| Err(tickerlens_core::LensError::unsupported("news")))
        })
    }
}
