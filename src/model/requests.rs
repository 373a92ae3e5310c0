/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::exchange::{Exchange, RevisionAction, Side};
use crate::utils::dates::date_or_today;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// HTTP verb of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiMethod {
    /// Parameters travel in the query string
    Get,
    /// Parameters travel as a JSON body
    Post,
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiMethod::Get => f.write_str("GET"),
            ApiMethod::Post => f.write_str("POST"),
        }
    }
}

/// One call to the API: where it goes, which transaction it is and its parameters
///
/// Parameters keep their insertion order, which is also the order the
/// server documents them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// Path relative to the environment base URL
    pub path: String,
    /// Transaction identifier before any paper-mode rewrite
    pub tr_id: String,
    /// HTTP verb
    pub method: ApiMethod,
    /// Ordered parameters
    pub params: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Creates a descriptor without parameters
    pub fn new(path: impl Into<String>, tr_id: impl Into<String>, method: ApiMethod) -> Self {
        Self {
            path: path.into(),
            tr_id: tr_id.into(),
            method,
            params: Vec::new(),
        }
    }

    /// Appends a parameter, builder style
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a parameter, replacing its value in place when it already exists
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.params.push((name, value)),
        }
    }

    /// Value of a parameter
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Parameters as a JSON object, used as POST body
    #[must_use]
    pub fn body(&self) -> Value {
        let map: Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }
}

/// Formats a price the way the API expects it: no trailing zeros
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price}")
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Cash order on an overseas exchange
pub struct OrderRequest {
    /// Buy or sell
    pub side: Side,
    /// Exchange
    pub exchange: Exchange,
    /// Symbol (`PDNO`)
    pub symbol: String,
    /// Number of shares
    pub quantity: u64,
    /// Limit price per share
    pub price: f64,
    /// Order type (`ORD_DVSN`), `00` is a limit order
    pub ord_dvsn: String,
}

impl OrderRequest {
    /// Limit order
    pub fn limit(
        side: Side,
        exchange: Exchange,
        symbol: impl Into<String>,
        quantity: u64,
        price: f64,
    ) -> Self {
        Self {
            side,
            exchange,
            symbol: symbol.into(),
            quantity,
            price,
            ord_dvsn: "00".to_string(),
        }
    }

    /// Same order with another `ORD_DVSN` (LOO, LOC, MOO, ...)
    #[must_use]
    pub fn with_ord_dvsn(mut self, ord_dvsn: impl Into<String>) -> Self {
        self.ord_dvsn = ord_dvsn.into();
        self
    }

    /// Symbol set, quantity and price not zero
    pub fn validate(&self) -> Result<(), AppError> {
        if self.symbol.trim().is_empty() {
            return Err(AppError::InvalidInput("symbol (PDNO) is required".to_string()));
        }
        if self.quantity == 0 {
            return Err(AppError::InvalidInput("order quantity must not be 0".to_string()));
        }
        if self.price == 0.0 {
            return Err(AppError::InvalidInput("order price must not be 0".to_string()));
        }
        Ok(())
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Revision or cancellation of a working order
pub struct ReviseCancelRequest {
    /// Exchange of the original order
    pub exchange: Exchange,
    /// Symbol of the original order
    pub symbol: String,
    /// Original order number (`ORGN_ODNO`)
    pub original_order_no: String,
    /// Revise or cancel
    pub action: RevisionAction,
    /// Quantity to revise or cancel; 0 means all that remains
    pub quantity: u64,
    /// New price; 0 on a cancel
    pub price: f64,
}

impl ReviseCancelRequest {
    /// Price change of a working order
    pub fn revise(
        exchange: Exchange,
        symbol: impl Into<String>,
        original_order_no: impl Into<String>,
        quantity: u64,
        price: f64,
    ) -> Self {
        Self {
            exchange,
            symbol: symbol.into(),
            original_order_no: original_order_no.into(),
            action: RevisionAction::Revise,
            quantity,
            price,
        }
    }

    /// Cancellation of a working order
    pub fn cancel(
        exchange: Exchange,
        symbol: impl Into<String>,
        original_order_no: impl Into<String>,
        quantity: u64,
    ) -> Self {
        Self {
            exchange,
            symbol: symbol.into(),
            original_order_no: original_order_no.into(),
            action: RevisionAction::Cancel,
            quantity,
            price: 0.0,
        }
    }

    /// Original order number set, price set on a revise
    pub fn validate(&self) -> Result<(), AppError> {
        if self.original_order_no.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "original order number (ORGN_ODNO) is required".to_string(),
            ));
        }
        if self.action == RevisionAction::Revise && self.price == 0.0 {
            return Err(AppError::InvalidInput("revise price must not be 0".to_string()));
        }
        Ok(())
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Filters of the order and fill history
pub struct ExecutionQuery {
    /// Symbol, `%` for all
    pub symbol: String,
    /// First order date, today when empty
    pub start_date: String,
    /// Last order date, today when empty
    pub end_date: String,
    /// `00` all, `01` sell, `02` buy
    pub side: String,
    /// `00` all, `01` filled, `02` unfilled
    pub fill_state: String,
    /// Exchange code, `%` for all
    pub exchange: String,
    /// `DS` newest first, `AS` oldest first
    pub sort: String,
}

impl Default for ExecutionQuery {
    fn default() -> Self {
        Self {
            symbol: "%".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            side: "00".to_string(),
            fill_state: "00".to_string(),
            exchange: "%".to_string(),
            sort: "DS".to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
/// Filters of the realized profit inquiry
pub struct ProfitQuery {
    /// Exchange code, empty for all
    pub exchange: String,
    /// Currency code, empty for all
    pub currency: String,
    /// Symbol, empty for all
    pub symbol: String,
    /// First date, today when empty
    pub start_date: String,
    /// Last date, today when empty
    pub end_date: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Filters of the period transaction inquiry
pub struct TransactionQuery {
    /// First registration date, today when empty
    pub start_date: String,
    /// Last registration date, today when empty
    pub end_date: String,
    /// Exchange code, empty for all
    pub exchange: String,
    /// Symbol, empty for all
    pub symbol: String,
    /// `00` all, `01` sell, `02` buy
    pub side: String,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            exchange: String::new(),
            symbol: String::new(),
            side: "00".to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Parameters of the present balance inquiry
pub struct PresentBalanceQuery {
    /// `01` won, `02` foreign currency
    pub currency_kind: String,
    /// Nation code, `000` for all
    pub nation: String,
    /// Market code, `00` for all
    pub market: String,
    /// Inquiry kind, `00` for all
    pub inquiry_kind: String,
}

impl Default for PresentBalanceQuery {
    fn default() -> Self {
        Self {
            currency_kind: "01".to_string(),
            nation: "000".to_string(),
            market: "00".to_string(),
            inquiry_kind: "00".to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Parameters of the payment-date balance inquiry
pub struct PaymentBalanceQuery {
    /// Base date, today when empty
    pub base_date: String,
    /// `01` won, `02` foreign currency
    pub currency_kind: String,
    /// Inquiry kind, `00` for all
    pub inquiry_kind: String,
}

impl Default for PaymentBalanceQuery {
    fn default() -> Self {
        Self {
            base_date: String::new(),
            currency_kind: "01".to_string(),
            inquiry_kind: "00".to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Parameters of the daily price inquiry
pub struct DailyPriceQuery {
    /// Exchange code as used by the quote service (`NAS`, `NYS`, `HKS`, ...)
    pub exchange: String,
    /// Symbol
    pub symbol: String,
    /// `0` daily, `1` weekly, `2` monthly
    pub period: String,
    /// Last date of the range, today when empty
    pub base_date: String,
    /// `0` raw prices, `1` adjusted
    pub adjusted: String,
}

impl DailyPriceQuery {
    /// Daily raw bars up to today
    pub fn daily(exchange: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            exchange: exchange.into(),
            symbol: symbol.into(),
            period: "0".to_string(),
            base_date: String::new(),
            adjusted: "0".to_string(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Parameters of the index/FX/symbol period chart
pub struct PeriodChartQuery {
    /// `N` overseas index, `X` exchange rate, `I` government bond, `S` gold futures
    pub market: String,
    /// Instrument code
    pub code: String,
    /// First date, today when empty
    pub start_date: String,
    /// Last date, today when empty
    pub end_date: String,
    /// `D` day, `W` week, `M` month, `Y` year
    pub period: String,
}

impl PeriodChartQuery {
    /// Start and end dates as sent, empty ones replaced by today
    pub fn dates(&self) -> Result<(String, String), AppError> {
        Ok((
            date_or_today(&self.start_date, "start_date")?,
            date_or_today(&self.end_date, "end_date")?,
        ))
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
/// Inclusive bounds of one condition search filter; the filter is active when both are set
pub struct Range {
    /// Lower bound
    pub start: String,
    /// Upper bound
    pub end: String,
}

impl Range {
    /// Range between two bounds
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// `CO_YN_*` flag: `1` when both bounds are set
    #[must_use]
    pub fn flag(&self) -> &'static str {
        if self.start.is_empty() || self.end.is_empty() {
            ""
        } else {
            "1"
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
/// Condition search filters
pub struct SearchCondition {
    /// Exchange code as used by the quote service
    pub exchange: String,
    /// Current price
    pub price: Range,
    /// Change rate
    pub rate: Range,
    /// Volume
    pub volume: Range,
    /// PER
    pub per: Range,
    /// EPS
    pub eps: Range,
    /// Traded amount
    pub amount: Range,
    /// Shares outstanding
    pub shares: Range,
    /// Market value
    pub market_value: Range,
}

impl SearchCondition {
    /// Query parameters, each filter as its `CO_YN_`/`CO_ST_`/`CO_EN_` triple
    #[must_use]
    pub fn params(&self) -> Vec<(String, String)> {
        let filters = [
            ("PRICECUR", &self.price),
            ("RATE", &self.rate),
            ("VOLUME", &self.volume),
            ("PER", &self.per),
            ("EPS", &self.eps),
            ("AMT", &self.amount),
            ("SHAR", &self.shares),
            ("VALX", &self.market_value),
        ];
        let mut params = vec![
            ("AUTH".to_string(), String::new()),
            ("EXCD".to_string(), self.exchange.clone()),
        ];
        for (name, range) in filters {
            params.push((format!("CO_YN_{name}"), range.flag().to_string()));
            params.push((format!("CO_ST_{name}"), range.start.clone()));
            params.push((format!("CO_EN_{name}"), range.end.clone()));
        }
        params.push(("KEYB".to_string(), String::new()));
        params
    }
}
