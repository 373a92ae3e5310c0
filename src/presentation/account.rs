/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::exchange::Exchange;
use crate::presentation::serialization::string_as_float_opt;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Working order as listed by the unfilled orders inquiry
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UnfilledOrder {
    /// Order date, `YYYYMMDD`
    #[serde(rename = "ord_dt", default)]
    pub order_date: String,
    /// Order number
    #[serde(rename = "odno", default)]
    pub order_no: String,
    /// Original order number when this is a revision
    #[serde(rename = "orgn_odno", default)]
    pub original_order_no: String,
    /// Symbol
    #[serde(rename = "pdno", default)]
    pub symbol: String,
    /// Product name
    #[serde(rename = "prdt_name", default)]
    pub name: String,
    /// `01` sell, `02` buy
    #[serde(rename = "sll_buy_dvsn_cd", default)]
    pub side_code: String,
    /// Ordered quantity
    #[serde(rename = "ft_ord_qty", default, with = "string_as_float_opt")]
    pub quantity: Option<f64>,
    /// Limit price
    #[serde(rename = "ft_ord_unpr3", default, with = "string_as_float_opt")]
    pub price: Option<f64>,
    /// Quantity filled so far
    #[serde(rename = "ft_ccld_qty", default, with = "string_as_float_opt")]
    pub filled: Option<f64>,
    /// Quantity still working
    #[serde(rename = "nccs_qty", default, with = "string_as_float_opt")]
    pub remaining: Option<f64>,
    /// Exchange code
    #[serde(rename = "ovrs_excg_cd", default)]
    pub exchange: String,
}

impl UnfilledOrder {
    /// Exchange of the order, if the code is known
    #[must_use]
    pub fn exchange(&self) -> Option<Exchange> {
        self.exchange.parse().ok()
    }

    /// True for a sell order
    #[must_use]
    pub fn is_sell(&self) -> bool {
        self.side_code == "01"
    }
}

/// One position of the balance list
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Holding {
    /// Symbol
    #[serde(rename = "ovrs_pdno", default)]
    pub symbol: String,
    /// Product name
    #[serde(rename = "ovrs_item_name", default)]
    pub name: String,
    /// Shares held
    #[serde(rename = "ovrs_cblc_qty", default, with = "string_as_float_opt")]
    pub quantity: Option<f64>,
    /// Shares that can be sold now
    #[serde(rename = "ord_psbl_qty", default, with = "string_as_float_opt")]
    pub sellable: Option<f64>,
    /// Average purchase price
    #[serde(rename = "pchs_avg_pric", default, with = "string_as_float_opt")]
    pub average_price: Option<f64>,
    /// Last price
    #[serde(rename = "now_pric2", default, with = "string_as_float_opt")]
    pub last_price: Option<f64>,
    /// Unrealized profit in the trading currency
    #[serde(rename = "frcr_evlu_pfls_amt", default, with = "string_as_float_opt")]
    pub unrealized_pnl: Option<f64>,
    /// Unrealized profit rate, percent
    #[serde(rename = "evlu_pfls_rt", default, with = "string_as_float_opt")]
    pub unrealized_pnl_rate: Option<f64>,
    /// Exchange code
    #[serde(rename = "ovrs_excg_cd", default)]
    pub exchange: String,
    /// Trading currency
    #[serde(rename = "tr_crcy_cd", default)]
    pub currency: String,
}

impl Holding {
    /// Market value at the last price
    #[must_use]
    pub fn market_value(&self) -> Option<f64> {
        Some(self.quantity? * self.last_price?)
    }
}

/// One row of the order and fill history
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Execution {
    /// Order date, `YYYYMMDD`
    #[serde(rename = "ord_dt", default)]
    pub order_date: String,
    /// Order number
    #[serde(rename = "odno", default)]
    pub order_no: String,
    /// Symbol
    #[serde(rename = "pdno", default)]
    pub symbol: String,
    /// Product name
    #[serde(rename = "prdt_name", default)]
    pub name: String,
    /// Side as text
    #[serde(rename = "sll_buy_dvsn_cd_name", default)]
    pub side: String,
    /// Ordered quantity
    #[serde(rename = "ft_ord_qty", default, with = "string_as_float_opt")]
    pub quantity: Option<f64>,
    /// Filled quantity
    #[serde(rename = "ft_ccld_qty", default, with = "string_as_float_opt")]
    pub filled: Option<f64>,
    /// Average fill price
    #[serde(rename = "ft_ccld_unpr3", default, with = "string_as_float_opt")]
    pub fill_price: Option<f64>,
    /// Quantity not filled
    #[serde(rename = "nccs_qty", default, with = "string_as_float_opt")]
    pub remaining: Option<f64>,
    /// Processing status as text
    #[serde(rename = "prcs_stat_name", default)]
    pub status: String,
    /// Exchange code
    #[serde(rename = "ovrs_excg_cd", default)]
    pub exchange: String,
}

impl Execution {
    /// Fully filled
    #[must_use]
    pub fn is_filled(&self) -> bool {
        matches!(self.remaining, Some(r) if r == 0.0) && self.filled.is_some_and(|f| f > 0.0)
    }
}
