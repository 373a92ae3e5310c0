use kis_overseas_client::model::exchange::Exchange;
use kis_overseas_client::model::table::ResultTable;
use kis_overseas_client::presentation::{
    CurrentPrice, DailyPrice, Execution, Holding, OrderReceipt, UnfilledOrder,
};
use serde_json::json;

#[test]
fn test_order_receipt() {
    let table = ResultTable::from_value(&json!({
        "KRX_FWDG_ORD_ORGNO": "01790",
        "ODNO": "0000004336",
        "ORD_TMD": "160524"
    }));
    let receipts: Vec<OrderReceipt> = table.records().unwrap();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].order_no, "0000004336");
    assert_eq!(receipts[0].order_time, "160524");
}

#[test]
fn test_unfilled_orders() {
    let table = ResultTable::from_value(&json!([
        {
            "ord_dt": "20240502", "odno": "0030138295", "orgn_odno": "", "pdno": "TSLA",
            "prdt_name": "테슬라", "sll_buy_dvsn_cd": "02", "ft_ord_qty": "1",
            "ft_ord_unpr3": "150.00000000", "ft_ccld_qty": "0", "nccs_qty": "1",
            "ovrs_excg_cd": "NASD"
        }
    ]));
    let orders: Vec<UnfilledOrder> = table.records().unwrap();
    assert_eq!(orders[0].symbol, "TSLA");
    assert_eq!(orders[0].price, Some(150.0));
    assert_eq!(orders[0].remaining, Some(1.0));
    assert_eq!(orders[0].exchange(), Some(Exchange::Nasd));
    assert!(!orders[0].is_sell());
}

#[test]
fn test_holdings_market_value() {
    let table = ResultTable::from_value(&json!([
        {"ovrs_pdno": "AAPL", "ovrs_cblc_qty": "10", "now_pric2": "190.5", "pchs_avg_pric": "170"},
        {"ovrs_pdno": "NEW", "ovrs_cblc_qty": "", "now_pric2": "10"}
    ]));
    let holdings: Vec<Holding> = table.records().unwrap();
    assert_eq!(holdings[0].market_value(), Some(1905.0));
    assert_eq!(holdings[0].average_price, Some(170.0));
    assert_eq!(holdings[1].market_value(), None);
    // Column absent from the response
    assert_eq!(holdings[0].currency, "");
}

#[test]
fn test_execution_filled() {
    let table = ResultTable::from_value(&json!([
        {"odno": "1", "ft_ord_qty": "5", "ft_ccld_qty": "5", "nccs_qty": "0"},
        {"odno": "2", "ft_ord_qty": "5", "ft_ccld_qty": "2", "nccs_qty": "3"},
        {"odno": "3", "ft_ord_qty": "5", "ft_ccld_qty": "0", "nccs_qty": "0"}
    ]));
    let rows: Vec<Execution> = table.records().unwrap();
    assert!(rows[0].is_filled());
    assert!(!rows[1].is_filled());
    assert!(!rows[2].is_filled());
}

#[test]
fn test_current_price() {
    let table = ResultTable::from_value(&json!({
        "rsym": "DNASAAPL", "zdiv": "4", "base": "189.9800", "pvol": "50219211",
        "last": "191.0400", "sign": "2", "diff": "1.0600", "rate": "+0.56",
        "tvol": "30412345", "tamt": "5811234567", "ordy": "매수불가"
    }));
    let price: Vec<CurrentPrice> = table.records().unwrap();
    assert_eq!(price[0].last, Some(191.04));
    assert_eq!(price[0].rate, Some(0.56));
    assert_eq!(price[0].orderable, None);
}

#[test]
fn test_daily_price_range() {
    let table = ResultTable::from_value(&json!([
        {"xymd": "20240502", "clos": "173.03", "open": "172.51", "high": "173.42", "low": "170.89"}
    ]));
    let bars: Vec<DailyPrice> = table.records().unwrap();
    assert_eq!(bars[0].date, "20240502");
    let range = bars[0].range().unwrap();
    assert!((range - 2.53).abs() < 1e-9);
    assert_eq!(bars[0].volume, None);
}
