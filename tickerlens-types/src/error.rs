use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tickerlens workspace.
///
/// Every step of a report (history, options, news) returns this type so the
/// orchestrator can collapse any failure into a single response.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LensError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "options/chain").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, non-finite numbers, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "history for AAPL".
        what: String,
    },

    /// The provider listed no option expirations for the symbol.
    #[error("No options data available for this ticker.")]
    NoOptionsData {
        /// Symbol whose expiration list came back empty.
        symbol: String,
    },
}

impl LensError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Data` error.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build a `NoOptionsData` error for a symbol.
    pub fn no_options_data(symbol: impl Into<String>) -> Self {
        Self::NoOptionsData {
            symbol: symbol.into(),
        }
    }

    /// Returns true if the failure originated at the provider rather than in the
    /// caller's input or the connector's capability set.
    #[must_use]
    pub const fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            Self::Connector { .. } | Self::Data(_) | Self::NotFound { .. } | Self::NoOptionsData { .. }
        )
    }
}
