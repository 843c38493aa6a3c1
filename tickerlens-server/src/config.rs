//! Environment-driven server configuration.

use std::net::{AddrParseError, SocketAddr};

use tickerlens::LensConfig;

/// Listener and report settings, loaded from `TICKERLENS_*` variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Trailing history window in days.
    pub history_window_days: u32,
    /// Maximum number of news items per report.
    pub news_limit: usize,
    /// Serve from the fixture connector instead of Yahoo Finance.
    pub use_mock: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let lens = LensConfig::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            history_window_days: lens.history_window_days,
            news_limit: lens.news_limit,
            use_mock: false,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment. Unset or unparsable values keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        let host = get("TICKERLENS_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(d.host);
        let port = get("TICKERLENS_PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(d.port);
        let history_window_days = get("TICKERLENS_HISTORY_DAYS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(d.history_window_days);
        let news_limit = get("TICKERLENS_NEWS_LIMIT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(d.news_limit);
        let use_mock = get("TICKERLENS_USE_MOCK").is_some_and(|v| {
            !matches!(v.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "no")
        });

        Self {
            host,
            port,
            history_window_days,
            news_limit,
            use_mock,
        }
    }

    /// Socket address to bind.
    ///
    /// # Errors
    /// Returns an error if `host` is not a valid IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Report settings handed to the `TickerLens` builder.
    #[must_use]
    pub const fn lens_config(&self) -> LensConfig {
        LensConfig {
            history_window_days: self.history_window_days,
            news_limit: self.news_limit,
        }
    }
}
