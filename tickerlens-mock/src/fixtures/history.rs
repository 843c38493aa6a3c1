use chrono::NaiveDate;
use tickerlens_core::HistoricalBar;

pub fn by_symbol(s: &str) -> Option<Vec<HistoricalBar>> {
    match s {
        "AAPL" => Some(build(&[
            ("2024-10-16", 231.6, 232.1, 229.8, 231.8, 34_082_200),
            ("2024-10-17", 233.4, 233.9, 230.4, 232.2, 32_993_800),
            ("2024-10-18", 236.2, 236.2, 234.0, 235.0, 46_431_500),
        ])),
        "MSFT" => Some(build(&[
            ("2024-10-16", 415.2, 416.4, 410.5, 416.1, 15_508_900),
            ("2024-10-17", 422.4, 422.5, 415.6, 416.7, 14_820_000),
        ])),
        "TSLA" => Some(build(&[
            ("2024-10-16", 221.4, 222.8, 218.3, 221.3, 49_632_800),
            ("2024-10-17", 221.6, 222.0, 219.0, 220.9, 50_791_800),
        ])),
        "NOOPT" => Some(build(&[("2024-10-16", 10.0, 10.5, 9.8, 10.2, 12_000)])),
        "EMPTY" => Some(Vec::new()),
        _ => None,
    }
}

fn build(rows: &[(&str, f64, f64, f64, f64, u64)]) -> Vec<HistoricalBar> {
    rows.iter()
        .filter_map(|&(date, open, high, low, close, volume)| {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .ok()?
                .and_hms_opt(4, 0, 0)?
                .and_utc();
            Some(HistoricalBar {
                date,
                open,
                high,
                low,
                close,
                volume,
            })
        })
        .collect()
}
