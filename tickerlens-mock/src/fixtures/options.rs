use tickerlens_core::{OptionChain, OptionContract};

/// 2024-10-18 and 2024-10-25, both 00:00 UTC.
const NEAR: i64 = 1_729_209_600;
const NEXT: i64 = 1_729_814_400;

pub fn expirations_by_symbol(s: &str) -> Option<Vec<i64>> {
    match s {
        "AAPL" | "MSFT" => Some(vec![NEAR, NEXT]),
        "TSLA" => Some(vec![NEXT]),
        "NOOPT" | "EMPTY" => Some(Vec::new()),
        _ => None,
    }
}

pub fn chain_by_symbol_and_date(s: &str, date: i64) -> Option<OptionChain> {
    match (s, date) {
        ("AAPL", NEAR) => Some(OptionChain {
            calls: vec![
                contract(230.0, Some(6.15), Some(1_250), Some(8_400), Some(0.241)),
                contract(235.0, Some(2.71), Some(3_980), Some(12_050), Some(0.228)),
            ],
            puts: vec![contract(230.0, Some(0.44), Some(2_310), Some(9_870), Some(0.252))],
        }),
        ("AAPL", NEXT) => Some(OptionChain {
            calls: vec![contract(240.0, Some(1.02), None, Some(4_100), Some(0.219))],
            puts: vec![],
        }),
        ("MSFT", NEAR) => Some(OptionChain {
            calls: vec![contract(420.0, Some(3.35), Some(880), Some(5_020), Some(0.205))],
            puts: vec![contract(410.0, None, None, None, None)],
        }),
        ("TSLA", NEXT) => Some(OptionChain {
            calls: vec![contract(225.0, Some(7.80), Some(15_300), Some(22_400), Some(0.612))],
            puts: vec![contract(215.0, Some(4.10), Some(9_100), Some(18_700), Some(0.598))],
        }),
        _ => None,
    }
}

fn contract(
    strike: f64,
    last_price: Option<f64>,
    volume: Option<u64>,
    open_interest: Option<u64>,
    implied_volatility: Option<f64>,
) -> OptionContract {
    OptionContract {
        strike,
        last_price,
        volume,
        open_interest,
        implied_volatility,
    }
}
