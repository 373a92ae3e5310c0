use crate::common::{self, TOKEN, mock_token, ok_body};
use kis_overseas_client::prelude::*;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const PRICE_PATH: &str = "/uapi/overseas-price/v1/quotations/price";

async fn mock_price(server: &mut ServerGuard, bearer: &str, hits: usize) -> mockito::Mock {
    server
        .mock("GET", PRICE_PATH)
        .match_query(Matcher::Any)
        .match_header("authorization", format!("Bearer {bearer}").as_str())
        .match_header("appkey", "test-app-key")
        .match_header("tr_id", "HHDFS00000300")
        .with_status(200)
        .with_body(ok_body(json!({"output": {"rsym": "DNASAAPL", "last": "191.04"}})))
        .expect(hits)
        .create_async()
        .await
}

fn store(config: &Config, token: &str, valid_date: &str, mode: TradingMode) {
    TokenCache::new(&config.token_dir)
        .store(&CachedToken {
            token: token.to_string(),
            valid_date: valid_date.to_string(),
            mode,
        })
        .unwrap();
}

#[tokio::test]
async fn test_token_issued_once_and_cached() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 1).await;
    let price = mock_price(&mut server, TOKEN, 2).await;

    let config = common::create_test_config(&server.url(), TradingMode::Paper);
    let token_dir = config.token_dir.clone();
    let client = Client::new(config).unwrap();

    client.price("NAS", "AAPL").await.unwrap();
    let table = client.price("NAS", "AAPL").await.unwrap();
    assert_eq!(table.get(0, "last"), Some("191.04"));

    token.assert_async().await;
    price.assert_async().await;

    let cached = TokenCache::new(&token_dir).read().unwrap();
    assert_eq!(cached.token, TOKEN);
    assert_eq!(cached.mode, TradingMode::Paper);
    assert_eq!(cached.valid_date, "2099-12-31 23:59:59");
}

#[tokio::test]
async fn test_cached_token_is_reused() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 0).await;
    let price = mock_price(&mut server, "cached-token", 1).await;

    let config = common::create_test_config(&server.url(), TradingMode::Paper);
    store(&config, "cached-token", "2099-01-01 00:00:00", TradingMode::Paper);

    let client = Client::new(config).unwrap();
    client.price("NAS", "AAPL").await.unwrap();

    token.assert_async().await;
    price.assert_async().await;
}

#[tokio::test]
async fn test_cached_token_for_other_mode_is_replaced() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 1).await;
    let price = mock_price(&mut server, TOKEN, 1).await;

    let config = common::create_test_config(&server.url(), TradingMode::Paper);
    store(&config, "live-token", "2099-01-01 00:00:00", TradingMode::Live);
    let token_dir = config.token_dir.clone();

    let client = Client::new(config).unwrap();
    client.price("NAS", "AAPL").await.unwrap();

    token.assert_async().await;
    price.assert_async().await;
    assert_eq!(
        TokenCache::new(&token_dir).read().unwrap().mode,
        TradingMode::Paper
    );
}

#[tokio::test]
async fn test_expired_cached_token_is_replaced() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 1).await;
    let price = mock_price(&mut server, TOKEN, 1).await;

    let config = common::create_test_config(&server.url(), TradingMode::Live);
    store(&config, "old-token", "2020-01-01 00:00:00", TradingMode::Live);

    let client = Client::new(config).unwrap();
    client.price("NAS", "AAPL").await.unwrap();

    token.assert_async().await;
    price.assert_async().await;
}

#[tokio::test]
async fn test_token_request_body() {
    let mut server = Server::new_async().await;
    let token = server
        .mock("POST", "/oauth2/tokenP")
        .match_body(Matcher::Json(json!({
            "grant_type": "client_credentials",
            "appkey": "test-app-key",
            "appsecret": "test-app-secret"
        })))
        .with_status(200)
        .with_body(
            json!({"access_token": "t", "access_token_token_expired": "2099-12-31 23:59:59"})
                .to_string(),
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Paper);
    let session = client.login().await.unwrap();
    assert_eq!(session.access_token, "t");
    assert_eq!(session.mode, TradingMode::Paper);
    assert!(!session.needs_refresh());
    token.assert_async().await;
}

#[tokio::test]
async fn test_rejected_credentials_are_unauthorized() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/oauth2/tokenP")
        .with_status(403)
        .with_body(json!({"error_code": "EGW00103", "error_description": "유효하지 않은 AppKey입니다."}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Paper);
    let err = client.price("NAS", "AAPL").await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized));
}

#[tokio::test]
async fn test_empty_token_is_unauthorized() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/oauth2/tokenP")
        .with_status(200)
        .with_body(json!({"access_token": ""}).to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server, TradingMode::Paper);
    assert!(matches!(client.login().await, Err(AppError::Unauthorized)));
}

#[tokio::test]
async fn test_missing_keys_fail_before_request() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 0).await;

    let mut config = common::create_test_config(&server.url(), TradingMode::Dev);
    config.dev.credentials.app_secret = String::new();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    let client = Client::new(config).unwrap();
    assert!(matches!(client.login().await, Err(AppError::Unauthorized)));
    token.assert_async().await;
}

#[tokio::test]
async fn test_hashkey_header_on_post() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server, 1).await;
    let hashkey = server
        .mock("POST", "/uapi/hashkey")
        .match_header("appkey", "test-app-key")
        .match_body(Matcher::PartialJson(json!({"PDNO": "AAPL", "ORD_QTY": "1"})))
        .with_status(200)
        .with_body(json!({"JsonBody": {}, "HASH": "abc123"}).to_string())
        .create_async()
        .await;
    let order = server
        .mock("POST", "/uapi/overseas-stock/v1/trading/order")
        .match_header("hashkey", "abc123")
        .with_status(200)
        .with_body(ok_body(json!({"output": {"KRX_FWDG_ORD_ORGNO": "01790", "ODNO": "0000001", "ORD_TMD": "101010"}})))
        .create_async()
        .await;

    let mut config = common::create_test_config(&server.url(), TradingMode::Live);
    config.rest_api.use_hashkey = true;
    let client = Client::new(config).unwrap();

    let receipt = client
        .order(&OrderRequest::limit(Side::Buy, Exchange::Nasd, "AAPL", 1, 150.0))
        .await
        .unwrap();
    assert_eq!(receipt.get(0, "ODNO"), Some("0000001"));

    hashkey.assert_async().await;
    order.assert_async().await;
}

#[tokio::test]
async fn test_connect_logs_in() {
    let mut server = Server::new_async().await;
    let token = mock_token(&mut server, 1).await;

    let config = common::create_test_config(&server.url(), TradingMode::Paper);
    let client = Client::connect(config).await.unwrap();
    assert_eq!(client.mode(), TradingMode::Paper);
    token.assert_async().await;
}
