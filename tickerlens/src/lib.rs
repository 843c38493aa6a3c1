//! tickerlens builds one combined report for a ticker symbol.
//!
//! Overview
//! - Talks to a single connector implementing the `tickerlens_core` capability traits.
//! - Runs three steps in order: daily history over a trailing window, the option
//!   chain for the nearest listed expiration, and the most recent news.
//! - The first failing step aborts the report; partial reports are never returned.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerlens::{TickerLens, Ticker};
//! use tickerlens_yfinance::YfConnector;
//!
//! let lens = TickerLens::builder()
//!     .with_connector(Arc::new(YfConnector::try_new_default()?))
//!     .news_limit(5)
//!     .build()?;
//! let report = lens.report(&Ticker::new("AAPL")?).await?;
//! println!("{}", serde_json::to_string(&report)?);
//! ```
#![warn(missing_docs)]

mod core;
mod steps;

pub use crate::core::{TickerLens, TickerLensBuilder};
pub use tickerlens_core::{
    HistoricalBar, HistoryWindow, LensConfig, LensConnector, LensError, NewsItem, OptionChain,
    OptionContract, Ticker, TickerReport,
};
