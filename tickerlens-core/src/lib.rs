//! tickerlens-core
//!
//! Core types and traits shared across the tickerlens workspace.
//!
//! - `types`: request-scoped entities (bars, option contracts, news, the combined report).
//! - `connector`: the `LensConnector` trait and its capability provider traits.
//! - `timestamp`: per-field serialization rules for timestamps and epoch conversions.
//!
//! Provider crates project their native records into these types before
//! returning them, so nothing untyped reaches the orchestrator.
#![warn(missing_docs)]

/// Connector capability traits and the primary `LensConnector` interface.
pub mod connector;
pub mod timestamp;
/// Request-scoped entities.
pub mod types;

pub use connector::LensConnector;
pub use tickerlens_types::{ConnectorKey, LensConfig, LensError};
pub use types::{
    HistoricalBar, HistoryWindow, NewsItem, OptionChain, OptionContract, Ticker, TickerReport,
};
