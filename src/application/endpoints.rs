/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Endpoint table: path, verb and transaction identifier of every call
//!
//! Identifiers are the live ones; simulated mode rewrites them when the
//! request is sent.

use crate::model::exchange::{Exchange, Side};
use crate::model::requests::{ApiMethod, RequestDescriptor};

/// One API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the base URL
    pub path: &'static str,
    /// HTTP verb
    pub method: ApiMethod,
    /// Transaction identifier; empty when it depends on exchange or side
    pub tr_id: &'static str,
}

impl Endpoint {
    /// Request with the table's identifier
    #[must_use]
    pub fn request(&self) -> RequestDescriptor {
        RequestDescriptor::new(self.path, self.tr_id, self.method)
    }

    /// Request with an identifier chosen at call time
    #[must_use]
    pub fn request_with(&self, tr_id: &str) -> RequestDescriptor {
        RequestDescriptor::new(self.path, tr_id, self.method)
    }
}

const fn get(path: &'static str, tr_id: &'static str) -> Endpoint {
    Endpoint {
        path,
        method: ApiMethod::Get,
        tr_id,
    }
}

const fn post(path: &'static str, tr_id: &'static str) -> Endpoint {
    Endpoint {
        path,
        method: ApiMethod::Post,
        tr_id,
    }
}

/// Order placement; identifier from [`order_tr_id`]
pub const ORDER: Endpoint = post("/uapi/overseas-stock/v1/trading/order", "");
/// Revise or cancel; identifier from [`revise_cancel_tr_id`]
pub const ORDER_REVISE_CANCEL: Endpoint = post("/uapi/overseas-stock/v1/trading/order-rvsecncl", "");
/// US daytime order; identifier from [`daytime_order_tr_id`]
pub const DAYTIME_ORDER: Endpoint = post("/uapi/overseas-stock/v1/trading/daytime-order", "");
/// US daytime revise or cancel
pub const DAYTIME_REVISE_CANCEL: Endpoint =
    post("/uapi/overseas-stock/v1/trading/daytime-order-rvsecncl", "TTTS6038U");
/// Unfilled orders
pub const INQUIRE_NCCS: Endpoint = get("/uapi/overseas-stock/v1/trading/inquire-nccs", "TTTS3018R");
/// Balance
pub const INQUIRE_BALANCE: Endpoint =
    get("/uapi/overseas-stock/v1/trading/inquire-balance", "TTTS3012R");
/// Order and fill history
pub const INQUIRE_CCNL: Endpoint = get("/uapi/overseas-stock/v1/trading/inquire-ccnl", "TTTS3035R");
/// Present balance
pub const INQUIRE_PRESENT_BALANCE: Endpoint =
    get("/uapi/overseas-stock/v1/trading/inquire-present-balance", "CTRP6504R");
/// Buying power
pub const INQUIRE_PSAMOUNT: Endpoint =
    get("/uapi/overseas-stock/v1/trading/inquire-psamount", "TTTS3007R");
/// Realized profit over a period
pub const INQUIRE_PERIOD_PROFIT: Endpoint =
    get("/uapi/overseas-stock/v1/trading/inquire-period-profit", "TTTS3039R");
/// Foreign currency margin
pub const FOREIGN_MARGIN: Endpoint =
    get("/uapi/overseas-stock/v1/trading/foreign-margin", "TTTC2101R");
/// Transactions over a period
pub const INQUIRE_PERIOD_TRANS: Endpoint =
    get("/uapi/overseas-stock/v1/trading/inquire-period-trans", "CTOS4001R");
/// Balance on payment date basis
pub const INQUIRE_PAYMENT_BALANCE: Endpoint =
    get("/uapi/overseas-stock/v1/trading/inquire-paymt-stdr-balance", "CTRP6010R");

/// Current price
pub const PRICE: Endpoint = get("/uapi/overseas-price/v1/quotations/price", "HHDFS00000300");
/// Daily, weekly or monthly bars
pub const DAILY_PRICE: Endpoint =
    get("/uapi/overseas-price/v1/quotations/dailyprice", "HHDFS76240000");
/// Index, FX or symbol bars over a period
pub const DAILY_CHART_PRICE: Endpoint =
    get("/uapi/overseas-price/v1/quotations/inquire-daily-chartprice", "FHKST03030100");
/// Condition search
pub const INQUIRE_SEARCH: Endpoint =
    get("/uapi/overseas-price/v1/quotations/inquire-search", "HHDFS76410000");
/// Settlement calendar per country
pub const COUNTRIES_HOLIDAY: Endpoint =
    get("/uapi/overseas-stock/v1/quotations/countries-holiday", "CTOS5011R");
/// Detailed current price
pub const PRICE_DETAIL: Endpoint =
    get("/uapi/overseas-price/v1/quotations/price-detail", "HHDFS76200200");
/// Minute bars of a symbol
pub const TIME_ITEM_CHART_PRICE: Endpoint =
    get("/uapi/overseas-price/v1/quotations/inquire-time-itemchartprice", "HHDFS76950200");
/// Minute bars of an index
pub const TIME_INDEX_CHART_PRICE: Endpoint =
    get("/uapi/overseas-price/v1/quotations/inquire-time-indexchartprice", "FHKST03030200");
/// Product master data
pub const SEARCH_INFO: Endpoint = get("/uapi/overseas-price/v1/quotations/search-info", "CTPF1702R");
/// Ten-level order book
pub const ASKING_PRICE: Endpoint =
    get("/uapi/overseas-price/v1/quotations/inquire-asking-price", "HHDFS76200100");

/// Order identifier by side and exchange
#[must_use]
pub fn order_tr_id(side: Side, exchange: Exchange) -> &'static str {
    match (side, exchange) {
        (Side::Buy, Exchange::Nasd | Exchange::Nyse | Exchange::Amex) => "TTTT1002U",
        (Side::Buy, Exchange::Sehk) => "TTTS1002U",
        (Side::Buy, Exchange::Shaa) => "TTTS0202U",
        (Side::Buy, Exchange::Szaa) => "TTTS0305U",
        (Side::Buy, Exchange::Tkse) => "TTTS0308U",
        (Side::Buy, Exchange::Hase | Exchange::Vnse) => "TTTS0311U",
        (Side::Sell, Exchange::Nasd | Exchange::Nyse | Exchange::Amex) => "TTTT1006U",
        (Side::Sell, Exchange::Sehk) => "TTTS1001U",
        (Side::Sell, Exchange::Shaa) => "TTTS1005U",
        (Side::Sell, Exchange::Szaa) => "TTTS0304U",
        (Side::Sell, Exchange::Tkse) => "TTTS0307U",
        (Side::Sell, Exchange::Hase | Exchange::Vnse) => "TTTS0310U",
    }
}

/// Revise/cancel identifier by exchange
#[must_use]
pub fn revise_cancel_tr_id(exchange: Exchange) -> &'static str {
    match exchange {
        Exchange::Nasd | Exchange::Nyse | Exchange::Amex => "TTTT1004U",
        Exchange::Sehk => "TTTS1003U",
        Exchange::Shaa => "TTTS0302U",
        Exchange::Szaa => "TTTS0306U",
        Exchange::Tkse => "TTTS0309U",
        Exchange::Hase | Exchange::Vnse => "TTTS0312U",
    }
}

/// Daytime order identifier by side
#[must_use]
pub fn daytime_order_tr_id(side: Side) -> &'static str {
    match side {
        Side::Buy => "TTTS6036U",
        Side::Sell => "TTTS6037U",
    }
}
