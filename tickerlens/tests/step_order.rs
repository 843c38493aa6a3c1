use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tickerlens::{
    HistoricalBar, LensConnector, LensError, NewsItem, OptionChain, OptionContract, Ticker,
    TickerLens,
};
use tickerlens_mock::{DynamicMockConnector, DynamicMockController, MockBehavior, MockCall};

fn bar(day: u32) -> HistoricalBar {
    HistoricalBar {
        date: Utc.with_ymd_and_hms(2026, 10, day, 4, 0, 0).unwrap(),
        open: 1.0,
        high: 2.0,
        low: 0.5,
        close: 1.5,
        volume: 10,
    }
}

fn news(n: usize) -> Vec<NewsItem> {
    (0..n)
        .map(|i| {
            NewsItem::from_epoch(
                format!("headline {i}"),
                None,
                None,
                1_790_000_000 - i64::try_from(i).unwrap(),
            )
            .unwrap()
        })
        .collect()
}

async fn scripted() -> (Arc<dyn LensConnector>, DynamicMockController) {
    let (conn, ctrl) = DynamicMockConnector::new_with_controller("scripted");
    ctrl.set_history_behavior("AAPL", MockBehavior::Return(vec![bar(14), bar(15)]))
        .await;
    ctrl.set_expirations_behavior("AAPL", MockBehavior::Return(vec![1_792_800_000, 1_793_404_800]))
        .await;
    ctrl.set_chain_behavior(
        "AAPL",
        MockBehavior::Return(OptionChain {
            calls: vec![OptionContract {
                strike: 150.0,
                last_price: Some(2.5),
                volume: Some(10),
                open_interest: Some(20),
                implied_volatility: Some(0.3),
            }],
            puts: vec![],
        }),
    )
    .await;
    ctrl.set_news_behavior("AAPL", MockBehavior::Return(news(8)))
        .await;
    (conn, ctrl)
}

#[tokio::test]
async fn steps_run_in_order_with_window_and_nearest_expiration() {
    let (conn, ctrl) = scripted().await;
    let lens = TickerLens::builder().with_connector(conn).build().unwrap();
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 15, 42, 7).unwrap();

    let report = lens
        .report_at(&Ticker::new(" AAPL ").unwrap(), now)
        .await
        .unwrap();

    let end = Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap().timestamp();
    let start = Utc.with_ymd_and_hms(2024, 10, 16, 0, 0, 0).unwrap().timestamp();
    assert_eq!(
        ctrl.calls().await,
        vec![
            MockCall::History("AAPL".into(), (start, end)),
            MockCall::Expirations("AAPL".into()),
            MockCall::Chain("AAPL".into(), 1_792_800_000),
            MockCall::News("AAPL".into()),
        ]
    );
    assert_eq!(report.historical_data.len(), 2);
    assert_eq!(report.expiration_date.to_string(), "2026-10-24");
    assert_eq!(report.news.len(), 5);
    assert_eq!(report.news[0].title, "headline 0");
}

#[tokio::test]
async fn news_failure_yields_no_partial_report() {
    let (conn, ctrl) = scripted().await;
    ctrl.set_news_behavior(
        "AAPL",
        MockBehavior::Fail(LensError::connector("scripted", "status 502: news for AAPL")),
    )
    .await;
    let lens = TickerLens::builder().with_connector(conn).build().unwrap();

    let err = lens.report(&Ticker::new("AAPL").unwrap()).await.unwrap_err();
    assert_eq!(err.to_string(), "scripted failed: status 502: news for AAPL");
}

#[tokio::test]
async fn history_failure_stops_before_options_and_news() {
    let (conn, ctrl) = scripted().await;
    ctrl.set_history_behavior("AAPL", MockBehavior::Fail(LensError::not_found("history for AAPL")))
        .await;
    let lens = TickerLens::builder().with_connector(conn).build().unwrap();

    let err = lens.report(&Ticker::new("AAPL").unwrap()).await.unwrap_err();
    assert!(matches!(err, LensError::NotFound { .. }));
    let calls = ctrl.calls().await;
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls[0], MockCall::History(..)));
}

#[tokio::test]
async fn empty_expirations_skip_chain_and_news() {
    let (conn, ctrl) = scripted().await;
    ctrl.set_expirations_behavior("AAPL", MockBehavior::Return(vec![]))
        .await;
    let lens = TickerLens::builder().with_connector(conn).build().unwrap();

    let err = lens.report(&Ticker::new("AAPL").unwrap()).await.unwrap_err();
    assert!(matches!(err, LensError::NoOptionsData { .. }));
    assert_eq!(ctrl.calls().await.len(), 2);
}

#[tokio::test]
async fn empty_history_is_allowed() {
    let (conn, ctrl) = scripted().await;
    ctrl.set_history_behavior("AAPL", MockBehavior::Return(vec![]))
        .await;
    let lens = TickerLens::builder().with_connector(conn).build().unwrap();

    let report = lens.report(&Ticker::new("AAPL").unwrap()).await.unwrap();
    assert!(report.historical_data.is_empty());
    assert_eq!(report.options.calls.len(), 1);
}

#[tokio::test]
async fn missing_rule_surfaces_as_connector_error() {
    let (conn, _ctrl) = DynamicMockConnector::new_with_controller("bare");
    let lens = TickerLens::builder().with_connector(conn).build().unwrap();

    let err = lens.report(&Ticker::new("AAPL").unwrap()).await.unwrap_err();
    assert_eq!(
        err,
        LensError::connector("bare", "unsupported capability: history")
    );
}
