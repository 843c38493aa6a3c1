//! `/api/handler` routes and the response header layers.

use std::sync::Arc;

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderValue, StatusCode};
use axum::response::Json;
use axum::routing::get;
use tickerlens::{Ticker, TickerLens, TickerReport};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Path of the single report endpoint.
pub const HANDLER_PATH: &str = "/api/handler";

/// Build the application router with CORS headers on every response.
pub fn build_router(lens: Arc<TickerLens>) -> Router {
    Router::new()
        .route(HANDLER_PATH, get(report).options(preflight))
        .fallback(not_found)
        .with_state(lens)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("X-Requested-With, Content-type"),
        ))
}

/// First non-empty `ticker` value in the query string, trimmed; `None` if absent or blank.
fn ticker_param(query: Option<&str>) -> Option<Ticker> {
    let raw = url::form_urlencoded::parse(query?.as_bytes())
        .find(|(k, v)| k == "ticker" && !v.is_empty())
        .map(|(_, v)| v.into_owned())?;
    Ticker::new(&raw).ok()
}

async fn report(
    State(lens): State<Arc<TickerLens>>,
    RawQuery(query): RawQuery,
) -> Result<Json<TickerReport>, ApiError> {
    let ticker = ticker_param(query.as_deref()).ok_or(ApiError::MissingTicker)?;
    debug!(ticker = %ticker, connector = lens.connector_name(), "building report");
    match lens.report(&ticker).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            warn!(ticker = %ticker, error = %e, "report failed");
            Err(ApiError::Fetch(e))
        }
    }
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_param_takes_first_value_and_trims() {
        let t = ticker_param(Some("ticker=%20msft%20&ticker=AAPL")).unwrap();
        assert_eq!(t.as_str(), "msft");
    }

    #[test]
    fn ticker_param_decodes_plus_and_percent() {
        let t = ticker_param(Some("x=1&ticker=BRK%2EB+")).unwrap();
        assert_eq!(t.as_str(), "BRK.B");
    }

    #[test]
    fn ticker_param_skips_empty_values() {
        let t = ticker_param(Some("ticker=&ticker=AAPL")).unwrap();
        assert_eq!(t.as_str(), "AAPL");
        assert!(ticker_param(Some("ticker=&ticker=")).is_none());
    }

    #[test]
    fn missing_or_blank_ticker_is_none() {
        assert!(ticker_param(None).is_none());
        assert!(ticker_param(Some("")).is_none());
        assert!(ticker_param(Some("symbol=AAPL")).is_none());
        assert!(ticker_param(Some("ticker=")).is_none());
        assert!(ticker_param(Some("ticker=+++")).is_none());
    }
}
