#![cfg(feature = "test-adapters")]

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use tickerlens_core::connector::{OptionChainProvider, OptionsExpirationsProvider};
use tickerlens_core::{LensError, Ticker};
use tickerlens_yfinance::{YfConnector, adapter};
use yfinance_rs as yf;

use common::{Combo, contract};

struct StubOptions;
#[async_trait]
impl adapter::YfOptions for StubOptions {
    async fn expirations(&self, symbol: &str) -> Result<Vec<i64>, LensError> {
        assert_eq!(symbol, "AAPL");
        Ok(vec![1_725_813_600, 1_726_400_000])
    }
    async fn chain(
        &self,
        symbol: &str,
        date: Option<i64>,
    ) -> Result<yf::ticker::OptionChain, LensError> {
        assert_eq!(symbol, "AAPL");
        assert_eq!(date, Some(1_725_813_600));
        Ok(yf::ticker::OptionChain {
            calls: vec![contract("AAPL240908C00100000", "100", Some("1.25"))],
            puts: vec![
                contract("AAPL240908P00100000", "100", Some("0.95")),
                contract("AAPL240908P00095000", "95", None),
            ],
        })
    }
}

#[tokio::test]
async fn options_injection_expirations_and_chain_map_correctly() {
    let yf = YfConnector::from_adapter(&Combo {
        o: Some(Arc::new(StubOptions)),
        ..Combo::default()
    });
    let ticker = Ticker::new("AAPL").unwrap();

    let exps = yf.options_expirations(&ticker).await.unwrap();
    assert_eq!(exps, vec![1_725_813_600, 1_726_400_000]);

    let ch = yf.option_chain(&ticker, 1_725_813_600).await.unwrap();
    assert_eq!(ch.calls.len(), 1);
    assert_eq!(ch.puts.len(), 2);

    let call = &ch.calls[0];
    assert_eq!(call.strike, 100.0);
    assert_eq!(call.last_price, Some(1.25));
    assert_eq!(call.volume, Some(123));
    assert_eq!(call.open_interest, Some(456));
    assert_eq!(call.implied_volatility, Some(0.35));

    assert_eq!(ch.puts[1].strike, 95.0);
    assert_eq!(ch.puts[1].last_price, None);
}

#[tokio::test]
async fn projected_contract_serializes_to_five_keys() {
    let yf = YfConnector::from_adapter(&Combo {
        o: Some(Arc::new(StubOptions)),
        ..Combo::default()
    });
    let ch = yf
        .option_chain(&Ticker::new("AAPL").unwrap(), 1_725_813_600)
        .await
        .unwrap();
    let v = serde_json::to_value(&ch.calls[0]).unwrap();
    assert_eq!(v.as_object().unwrap().len(), 5);
}
