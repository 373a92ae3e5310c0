use kis_overseas_client::error::AppError;
use kis_overseas_client::model::exchange::{Exchange, RevisionAction, Side};
use kis_overseas_client::model::requests::{
    ExecutionQuery, OrderRequest, PaymentBalanceQuery, PeriodChartQuery, PresentBalanceQuery,
    Range, ReviseCancelRequest, SearchCondition, TransactionQuery,
};
use kis_overseas_client::utils::dates::today_yyyymmdd;

#[test]
fn test_query_defaults() {
    let exec = ExecutionQuery::default();
    assert_eq!(exec.symbol, "%");
    assert_eq!(exec.exchange, "%");
    assert_eq!(exec.sort, "DS");
    assert!(exec.start_date.is_empty());

    assert_eq!(TransactionQuery::default().side, "00");

    let present = PresentBalanceQuery::default();
    assert_eq!(present.currency_kind, "01");
    assert_eq!(present.nation, "000");

    let payment = PaymentBalanceQuery::default();
    assert!(payment.base_date.is_empty());
    assert_eq!(payment.inquiry_kind, "00");
}

#[test]
fn test_order_with_ord_dvsn() {
    let order = OrderRequest::limit(Side::Sell, Exchange::Nyse, "IBM", 2, 180.25).with_ord_dvsn("34");
    assert_eq!(order.ord_dvsn, "34");
    assert!(order.validate().is_ok());
}

#[test]
fn test_order_display_is_json() {
    let order = OrderRequest::limit(Side::Buy, Exchange::Nasd, "AAPL", 1, 150.0);
    let text = order.to_string();
    assert!(text.contains("\"symbol\":\"AAPL\""));
}

#[test]
fn test_cancel_has_no_price() {
    let cancel = ReviseCancelRequest::cancel(Exchange::Sehk, "00700", "0001", 0);
    assert_eq!(cancel.action, RevisionAction::Cancel);
    assert_eq!(cancel.price, 0.0);
    assert!(cancel.validate().is_ok());

    let revise = ReviseCancelRequest::revise(Exchange::Sehk, "00700", "0001", 100, 320.2);
    assert_eq!(revise.action, RevisionAction::Revise);
    assert!(revise.validate().is_ok());
}

#[test]
fn test_period_chart_dates() {
    let mut query = PeriodChartQuery {
        market: "N".to_string(),
        code: ".DJI".to_string(),
        start_date: "20240101".to_string(),
        end_date: "20240131".to_string(),
        period: "D".to_string(),
    };
    assert_eq!(
        query.dates().unwrap(),
        ("20240101".to_string(), "20240131".to_string())
    );

    query.end_date = "2024-01-31".to_string();
    assert!(matches!(query.dates(), Err(AppError::InvalidInput(_))));

    query.start_date = String::new();
    query.end_date = String::new();
    let today = today_yyyymmdd();
    assert_eq!(query.dates().unwrap(), (today.clone(), today));
}

#[test]
fn test_search_condition_param_order() {
    let cond = SearchCondition {
        exchange: "HKS".to_string(),
        volume: Range::new("1000", "999999"),
        ..Default::default()
    };
    let params = cond.params();
    let names: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();

    assert_eq!(names[0], "AUTH");
    assert_eq!(names[1], "EXCD");
    assert_eq!(&names[2..5], &["CO_YN_PRICECUR", "CO_ST_PRICECUR", "CO_EN_PRICECUR"]);
    assert_eq!(names.last(), Some(&"KEYB"));

    let volume = params.iter().find(|(k, _)| k == "CO_YN_VOLUME").unwrap();
    assert_eq!(volume.1, "1");
}

#[test]
fn test_range_flag() {
    assert_eq!(Range::new("1", "2").flag(), "1");
    assert_eq!(Range::new("", "2").flag(), "");
    assert_eq!(Range::default().flag(), "");
}
