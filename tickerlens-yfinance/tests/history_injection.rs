#![cfg(feature = "test-adapters")]

mod common;

use chrono::{TimeZone, Utc};
use tickerlens_core::connector::HistoryProvider;
use tickerlens_core::{HistoryWindow, Ticker};
use tickerlens_yfinance::{YfConnector, adapter};
use yfinance_rs as yf;

use common::{Combo, candle};

#[tokio::test]
async fn history_requests_daily_bars_over_window_and_projects_ohlcv() {
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 15, 0, 0).unwrap();
    let window = HistoryWindow::trailing(730, now);
    let expected_period = window.as_epoch_period();

    let hist = <dyn adapter::YfHistory>::from_fn(move |symbol, req| {
        assert_eq!(symbol, "AAPL");
        assert_eq!(req.period, Some(expected_period));
        assert!(req.range.is_none());
        assert!(!req.include_prepost);
        Ok(yf::HistoryResponse {
            candles: vec![
                candle(Utc.timestamp_opt(1_714_570_200, 0).unwrap(), "1.00", "2.00", "0.50", "1.50", Some(100)),
                candle(Utc.timestamp_opt(1_714_656_600, 0).unwrap(), "1.50", "1.75", "1.25", "1.60", None),
            ],
            actions: vec![],
            adjusted: true,
            meta: Some(yf::HistoryMeta {
                timezone: None,
                utc_offset_seconds: Some(0),
            }),
        })
    });

    let yf = YfConnector::from_adapter(&Combo {
        h: Some(hist),
        ..Combo::default()
    });
    let bars = yf
        .history(&Ticker::new("AAPL").unwrap(), window)
        .await
        .unwrap();

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].open, 1.0);
    assert_eq!(bars[0].high, 2.0);
    assert_eq!(bars[0].low, 0.5);
    assert_eq!(bars[0].close, 1.5);
    assert_eq!(bars[0].volume, 100);
    assert_eq!(bars[1].volume, 0, "missing volume reads as zero");
    assert!(bars[0].date < bars[1].date);
}

#[tokio::test]
async fn empty_history_is_not_an_error() {
    let hist = <dyn adapter::YfHistory>::from_fn(|_, _| {
        Ok(yf::HistoryResponse {
            candles: vec![],
            actions: vec![],
            adjusted: true,
            meta: None,
        })
    });
    let yf = YfConnector::from_adapter(&Combo {
        h: Some(hist),
        ..Combo::default()
    });
    let window = HistoryWindow::trailing(730, Utc::now());
    let bars = yf
        .history(&Ticker::new("NEWIPO").unwrap(), window)
        .await
        .unwrap();
    assert!(bars.is_empty());
}
