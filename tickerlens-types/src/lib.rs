//! Tickerlens-specific error and configuration primitives.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;

pub use config::{DEFAULT_HISTORY_WINDOW_DAYS, DEFAULT_NEWS_LIMIT, LensConfig};
pub use connector::ConnectorKey;
pub use error::LensError;
