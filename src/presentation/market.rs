/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::presentation::serialization::{string_as_float_opt, yes_no_opt};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Current price of a symbol
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CurrentPrice {
    /// Real-time symbol key, e.g. `DNASAAPL`
    #[serde(default)]
    pub rsym: String,
    /// Decimal places of the prices
    #[serde(rename = "zdiv", default, with = "string_as_float_opt")]
    pub decimals: Option<f64>,
    /// Previous close
    #[serde(rename = "base", default, with = "string_as_float_opt")]
    pub previous_close: Option<f64>,
    /// Previous day volume
    #[serde(rename = "pvol", default, with = "string_as_float_opt")]
    pub previous_volume: Option<f64>,
    /// Last price
    #[serde(default, with = "string_as_float_opt")]
    pub last: Option<f64>,
    /// Change sign code
    #[serde(default)]
    pub sign: String,
    /// Change against the previous close
    #[serde(rename = "diff", default, with = "string_as_float_opt")]
    pub change: Option<f64>,
    /// Change rate, percent
    #[serde(default, with = "string_as_float_opt")]
    pub rate: Option<f64>,
    /// Volume
    #[serde(rename = "tvol", default, with = "string_as_float_opt")]
    pub volume: Option<f64>,
    /// Traded amount
    #[serde(rename = "tamt", default, with = "string_as_float_opt")]
    pub amount: Option<f64>,
    /// Orderable now
    #[serde(rename = "ordy", default, deserialize_with = "yes_no_opt::deserialize", skip_serializing)]
    pub orderable: Option<bool>,
}

/// One daily, weekly or monthly bar
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DailyPrice {
    /// Bar date, `YYYYMMDD`
    #[serde(rename = "xymd", default)]
    pub date: String,
    /// Close
    #[serde(rename = "clos", default, with = "string_as_float_opt")]
    pub close: Option<f64>,
    /// Change sign code
    #[serde(default)]
    pub sign: String,
    /// Change against the previous bar
    #[serde(rename = "diff", default, with = "string_as_float_opt")]
    pub change: Option<f64>,
    /// Change rate, percent
    #[serde(default, with = "string_as_float_opt")]
    pub rate: Option<f64>,
    /// Open
    #[serde(default, with = "string_as_float_opt")]
    pub open: Option<f64>,
    /// High
    #[serde(default, with = "string_as_float_opt")]
    pub high: Option<f64>,
    /// Low
    #[serde(default, with = "string_as_float_opt")]
    pub low: Option<f64>,
    /// Volume
    #[serde(rename = "tvol", default, with = "string_as_float_opt")]
    pub volume: Option<f64>,
    /// Traded amount
    #[serde(rename = "tamt", default, with = "string_as_float_opt")]
    pub amount: Option<f64>,
}

impl DailyPrice {
    /// High minus low
    #[must_use]
    pub fn range(&self) -> Option<f64> {
        Some(self.high? - self.low?)
    }
}
