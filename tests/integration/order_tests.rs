use crate::common::{self, ACCOUNT, mock_token, ok_body};
use assert_json_diff::assert_json_include;
use kis_overseas_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

const ORDER_PATH: &str = "/uapi/overseas-stock/v1/trading/order";
const REVISE_PATH: &str = "/uapi/overseas-stock/v1/trading/order-rvsecncl";
const NCCS_PATH: &str = "/uapi/overseas-stock/v1/trading/inquire-nccs";

fn receipt(odno: &str) -> String {
    ok_body(json!({"output": {"KRX_FWDG_ORD_ORGNO": "01790", "ODNO": odno, "ORD_TMD": "223015"}}))
}

#[tokio::test]
async fn test_buy_order_body_and_paper_tr_id() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1).await;
    let order = server
        .mock("POST", ORDER_PATH)
        .match_header("tr_id", "VTTT1002U")
        .match_header("custtype", "P")
        .match_body(Matcher::Json(json!({
            "CANO": ACCOUNT,
            "ACNT_PRDT_CD": "01",
            "OVRS_EXCG_CD": "NASD",
            "PDNO": "AAPL",
            "ORD_DVSN": "00",
            "ORD_QTY": "1",
            "OVRS_ORD_UNPR": "150",
            "CTAC_TLNO": "",
            "MGCO_APTM_ODNO": "",
            "SLL_TYPE": "",
            "ORD_SVR_DVSN_CD": "0"
        })))
        .with_status(200)
        .with_body(receipt("0000004336"))
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Paper);
    let table = client
        .order(&OrderRequest::limit(Side::Buy, Exchange::Nasd, "AAPL", 1, 150.0))
        .await
        .unwrap();

    let receipts: Vec<OrderReceipt> = table.records().unwrap();
    assert_json_include!(
        actual: serde_json::to_value(&receipts[0]).unwrap(),
        expected: json!({"ODNO": "0000004336", "KRX_FWDG_ORD_ORGNO": "01790"})
    );
    order.assert_async().await;
}

#[tokio::test]
async fn test_sell_order_on_tokyo() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1).await;
    let order = server
        .mock("POST", ORDER_PATH)
        .match_header("tr_id", "TTTS0307U")
        .match_body(Matcher::PartialJson(json!({
            "OVRS_EXCG_CD": "TKSE",
            "SLL_TYPE": "00",
            "OVRS_ORD_UNPR": "2510.5",
            "ORD_QTY": "100"
        })))
        .with_status(200)
        .with_body(receipt("1"))
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Live);
    client
        .order(&OrderRequest::limit(Side::Sell, Exchange::Tkse, "7203", 100, 2510.5))
        .await
        .unwrap();
    order.assert_async().await;
}

#[tokio::test]
async fn test_invalid_order_sends_nothing() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 0).await;
    let order = server
        .mock("POST", ORDER_PATH)
        .expect(0)
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Paper);
    let zero_qty = OrderRequest::limit(Side::Buy, Exchange::Nasd, "AAPL", 0, 150.0);
    assert!(matches!(
        client.order(&zero_qty).await,
        Err(AppError::InvalidInput(_))
    ));
    let no_symbol = OrderRequest::limit(Side::Buy, Exchange::Nasd, " ", 1, 150.0);
    assert!(matches!(
        client.order(&no_symbol).await,
        Err(AppError::InvalidInput(_))
    ));

    token.assert_async().await;
    order.assert_async().await;
}

#[tokio::test]
async fn test_rejected_order_is_api_error() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1).await;
    let _order = server
        .mock("POST", ORDER_PATH)
        .with_status(200)
        .with_body(
            json!({"rt_cd": "1", "msg_cd": "APBK0656", "msg1": "해당종목정보가 없습니다."})
                .to_string(),
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Paper);
    let err = client
        .order(&OrderRequest::limit(Side::Buy, Exchange::Nasd, "ZZZZ", 1, 1.0))
        .await
        .unwrap_err();
    assert_eq!(err.msg_cd(), Some("APBK0656"));
}

#[tokio::test]
async fn test_revise_body() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1).await;
    let revise = server
        .mock("POST", REVISE_PATH)
        .match_header("tr_id", "TTTS1003U")
        .match_body(Matcher::PartialJson(json!({
            "OVRS_EXCG_CD": "SEHK",
            "PDNO": "00700",
            "ORGN_ODNO": "0030138295",
            "RVSE_CNCL_DVSN_CD": "01",
            "ORD_QTY": "100",
            "OVRS_ORD_UNPR": "320.2"
        })))
        .with_status(200)
        .with_body(receipt("0030138300"))
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Live);
    let request = ReviseCancelRequest::revise(Exchange::Sehk, "00700", "0030138295", 100, 320.2);
    let table = client.order_revise_cancel(&request).await.unwrap();
    assert_eq!(table.get(0, "ODNO"), Some("0030138300"));
    revise.assert_async().await;
}

#[tokio::test]
async fn test_cancel_all_unfilled_skips_rejections() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1).await;
    let _nccs = server
        .mock("GET", NCCS_PATH)
        .match_query(Matcher::UrlEncoded("OVRS_EXCG_CD".into(), "NYSE".into()))
        .with_status(200)
        .with_body(ok_body(json!({
            "output": [
                {"odno": "1", "pdno": "IBM", "ovrs_excg_cd": "NYSE", "nccs_qty": "1"},
                {"odno": "2", "pdno": "KO", "ovrs_excg_cd": "NYSE", "nccs_qty": "3"},
                {"odno": "3", "pdno": "IBM", "ovrs_excg_cd": "NYSE", "nccs_qty": "2"}
            ]
        })))
        .create_async()
        .await;
    let accepted = server
        .mock("POST", REVISE_PATH)
        .match_header("tr_id", "TTTT1004U")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"RVSE_CNCL_DVSN_CD": "02", "ORD_QTY": "0", "OVRS_ORD_UNPR": "0"})),
            Matcher::Regex(r#""ORGN_ODNO":"[12]""#.to_string()),
        ]))
        .with_status(200)
        .with_body(receipt("9"))
        .expect(2)
        .create_async()
        .await;
    let rejected = server
        .mock("POST", REVISE_PATH)
        .match_body(Matcher::PartialJson(json!({"ORGN_ODNO": "3"})))
        .with_status(200)
        .with_body(
            json!({"rt_cd": "1", "msg_cd": "APBK1234", "msg1": "이미 체결된 주문입니다."})
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Live);
    let receipts = client
        .cancel_all_unfilled(Exchange::Nyse, None)
        .await
        .unwrap();
    assert_eq!(receipts.len(), 2);
    accepted.assert_async().await;
    rejected.assert_async().await;
}

#[tokio::test]
async fn test_cancel_all_unfilled_for_one_symbol() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1).await;
    let _nccs = server
        .mock("GET", NCCS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(ok_body(json!({
            "output": [
                {"odno": "1", "pdno": "AAPL", "ovrs_excg_cd": "NASD"},
                {"odno": "2", "pdno": "TSLA", "ovrs_excg_cd": "NASD"}
            ]
        })))
        .create_async()
        .await;
    let cancel = server
        .mock("POST", REVISE_PATH)
        .match_body(Matcher::PartialJson(json!({"ORGN_ODNO": "2", "PDNO": "TSLA"})))
        .with_status(200)
        .with_body(receipt("5"))
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Live);
    let receipts = client
        .cancel_all_unfilled(Exchange::Nasd, Some("TSLA"))
        .await
        .unwrap();
    assert_eq!(receipts.len(), 1);
    cancel.assert_async().await;
}

#[tokio::test]
async fn test_cancel_all_with_nothing_working() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1).await;
    let _nccs = server
        .mock("GET", NCCS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({"rt_cd": "0", "msg_cd": "KIOK0560", "msg1": "조회할 자료가 없습니다", "output": []})
                .to_string(),
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Live);
    let receipts = client
        .cancel_all_unfilled(Exchange::Nasd, None)
        .await
        .unwrap();
    assert!(receipts.is_empty());
}

#[tokio::test]
async fn test_daytime_order_is_us_only() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1).await;
    let daytime = server
        .mock("POST", "/uapi/overseas-stock/v1/trading/daytime-order")
        .match_header("tr_id", "TTTS6037U")
        .match_body(Matcher::PartialJson(json!({"ORD_DVSN": "00", "OVRS_EXCG_CD": "AMEX"})))
        .with_status(200)
        .with_body(receipt("7"))
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Live);
    let err = client
        .daytime_order(Side::Buy, Exchange::Sehk, "00700", 1, 300.0)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    client
        .daytime_order(Side::Sell, Exchange::Amex, "SPY", 1, 510.0)
        .await
        .unwrap();
    daytime.assert_async().await;
}

#[tokio::test]
async fn test_daytime_cancel() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1).await;
    let cancel = server
        .mock("POST", "/uapi/overseas-stock/v1/trading/daytime-order-rvsecncl")
        .match_header("tr_id", "TTTS6038U")
        .match_body(Matcher::PartialJson(json!({"RVSE_CNCL_DVSN_CD": "02", "ORGN_ODNO": "42"})))
        .with_status(200)
        .with_body(receipt("43"))
        .expect(1)
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Live);
    let request = ReviseCancelRequest::cancel(Exchange::Nasd, "AAPL", "42", 0);
    client.daytime_order_revise_cancel(&request).await.unwrap();

    let no_symbol = ReviseCancelRequest::cancel(Exchange::Nasd, "", "42", 0);
    assert!(client.daytime_order_revise_cancel(&no_symbol).await.is_err());
    cancel.assert_async().await;
}
