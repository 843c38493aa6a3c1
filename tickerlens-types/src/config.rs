//! Configuration types shared by the orchestrator and the server.

use serde::{Deserialize, Serialize};

/// Default trailing history window, in days (two calendar years).
pub const DEFAULT_HISTORY_WINDOW_DAYS: u32 = 730;

/// Default number of news items kept in a report.
pub const DEFAULT_NEWS_LIMIT: usize = 5;

/// Global configuration for the `TickerLens` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    /// Length of the trailing daily-history window ending today (UTC).
    pub history_window_days: u32,
    /// Maximum number of news items kept, in provider order.
    pub news_limit: usize,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            history_window_days: DEFAULT_HISTORY_WINDOW_DAYS,
            news_limit: DEFAULT_NEWS_LIMIT,
        }
    }
}
