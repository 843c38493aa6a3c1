use chrono::{NaiveDate, TimeZone, Utc};
use tickerlens_core::{HistoricalBar, NewsItem, OptionChain, OptionContract, TickerReport};

fn sample_report() -> TickerReport {
    TickerReport {
        historical_data: vec![HistoricalBar {
            date: Utc.with_ymd_and_hms(2024, 5, 1, 13, 30, 0).unwrap(),
            open: 1.0,
            high: 2.0,
            low: 0.5,
            close: 1.5,
            volume: 100,
        }],
        options: OptionChain {
            calls: vec![OptionContract {
                strike: 150.0,
                last_price: Some(2.5),
                volume: Some(10),
                open_interest: Some(200),
                implied_volatility: Some(0.3),
            }],
            puts: vec![OptionContract {
                strike: 140.0,
                last_price: None,
                volume: None,
                open_interest: None,
                implied_volatility: None,
            }],
        },
        expiration_date: NaiveDate::from_ymd_opt(2024, 6, 21).unwrap(),
        news: vec![NewsItem::from_epoch("Headline", Some("Reuters".into()), None, 1_714_570_200).unwrap()],
    }
}

#[test]
fn report_serializes_with_camel_case_top_level_keys_in_order() {
    let json = serde_json::to_string(&sample_report()).unwrap();
    let h = json.find("\"historicalData\"").unwrap();
    let o = json.find("\"options\"").unwrap();
    let e = json.find("\"expirationDate\"").unwrap();
    let n = json.find("\"news\"").unwrap();
    assert!(h < o && o < e && e < n, "unexpected key order: {json}");
    assert!(json.contains("\"expirationDate\":\"2024-06-21\""));
}

#[test]
fn bar_columns_follow_ohlcv_order() {
    let json = serde_json::to_string(&sample_report().historical_data[0]).unwrap();
    assert_eq!(
        json,
        r#"{"date":"2024-05-01T13:30:00Z","open":1.0,"high":2.0,"low":0.5,"close":1.5,"volume":100}"#
    );
}

#[test]
fn option_contract_exposes_exactly_five_fields() {
    let v = serde_json::to_value(&sample_report().options.calls[0]).unwrap();
    let obj = v.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["impliedVolatility", "lastPrice", "openInterest", "strike", "volume"]
    );
}

#[test]
fn missing_option_fields_serialize_as_null() {
    let v = serde_json::to_value(&sample_report().options.puts[0]).unwrap();
    assert_eq!(v["strike"], serde_json::json!(140.0));
    assert!(v["lastPrice"].is_null());
    assert!(v["volume"].is_null());
    assert!(v["openInterest"].is_null());
    assert!(v["impliedVolatility"].is_null());
}

#[test]
fn news_publish_time_is_iso8601_utc() {
    let v = serde_json::to_value(&sample_report().news[0]).unwrap();
    assert_eq!(v["published_utc"], "2024-05-01T13:30:00Z");
    assert_eq!(v["publisher"], "Reuters");
    assert!(v["link"].is_null());
}

#[test]
fn report_roundtrips_through_json() {
    let report = sample_report();
    let json = serde_json::to_string(&report).unwrap();
    let back: TickerReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
