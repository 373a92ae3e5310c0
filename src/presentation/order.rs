/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Receipt of an accepted order, revision or cancellation
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderReceipt {
    /// Branch that received the order
    #[serde(rename = "KRX_FWDG_ORD_ORGNO", default)]
    pub branch: String,
    /// Order number, used to revise or cancel
    #[serde(rename = "ODNO", default)]
    pub order_no: String,
    /// Order time, `HHMMSS`
    #[serde(rename = "ORD_TMD", default)]
    pub order_time: String,
}
