/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Overseas exchange code (`OVRS_EXCG_CD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// Nasdaq
    Nasd,
    /// New York Stock Exchange
    Nyse,
    /// NYSE American
    Amex,
    /// Hong Kong
    Sehk,
    /// Shanghai
    Shaa,
    /// Shenzhen
    Szaa,
    /// Tokyo
    Tkse,
    /// Hanoi
    Hase,
    /// Ho Chi Minh
    Vnse,
}

impl Exchange {
    /// Code sent on the wire
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Exchange::Nasd => "NASD",
            Exchange::Nyse => "NYSE",
            Exchange::Amex => "AMEX",
            Exchange::Sehk => "SEHK",
            Exchange::Shaa => "SHAA",
            Exchange::Szaa => "SZAA",
            Exchange::Tkse => "TKSE",
            Exchange::Hase => "HASE",
            Exchange::Vnse => "VNSE",
        }
    }

    /// US venues, the only ones open to daytime orders
    #[must_use]
    pub fn is_us(&self) -> bool {
        matches!(self, Exchange::Nasd | Exchange::Nyse | Exchange::Amex)
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Exchange {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NASD" => Ok(Exchange::Nasd),
            "NYSE" => Ok(Exchange::Nyse),
            "AMEX" => Ok(Exchange::Amex),
            // SHEK shows up in older samples for Hong Kong
            "SEHK" | "SHEK" => Ok(Exchange::Sehk),
            "SHAA" => Ok(Exchange::Shaa),
            "SZAA" => Ok(Exchange::Szaa),
            "TKSE" => Ok(Exchange::Tkse),
            "HASE" => Ok(Exchange::Hase),
            "VNSE" => Ok(Exchange::Vnse),
            "" => Err(AppError::InvalidInput("exchange code is empty".to_string())),
            other => Err(AppError::InvalidInput(format!(
                "unknown exchange code '{other}'"
            ))),
        }
    }
}

/// Order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy
    Buy,
    /// Sell
    Sell,
}

impl Side {
    /// `SLL_TYPE` value of an order
    #[must_use]
    pub fn sll_type(&self) -> &'static str {
        match self {
            Side::Buy => "",
            Side::Sell => "00",
        }
    }
}

impl FromStr for Side {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(AppError::InvalidInput(format!("unknown order side '{other}'"))),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => f.write_str("buy"),
            Side::Sell => f.write_str("sell"),
        }
    }
}

/// `RVSE_CNCL_DVSN_CD` of a revise/cancel request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RevisionAction {
    /// Change price or quantity (`01`)
    Revise,
    /// Cancel the remaining quantity (`02`)
    Cancel,
}

impl RevisionAction {
    /// Code sent on the wire
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            RevisionAction::Revise => "01",
            RevisionAction::Cancel => "02",
        }
    }
}

impl FromStr for RevisionAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "01" => Ok(RevisionAction::Revise),
            "02" => Ok(RevisionAction::Cancel),
            other => Err(AppError::InvalidInput(format!(
                "revise/cancel code must be 01 or 02, got '{other}'"
            ))),
        }
    }
}

/// Which numbered output section of a response to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSection {
    /// `output1`
    Output1,
    /// `output2`
    Output2,
    /// `output3`
    Output3,
}

impl OutputSection {
    /// Section key in the response body
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            OutputSection::Output1 => "output1",
            OutputSection::Output2 => "output2",
            OutputSection::Output3 => "output3",
        }
    }
}

impl FromStr for OutputSection {
    type Err = AppError;

    /// Accepts the `01`/`02`/`03` selector codes of the API samples
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "01" | "1" => Ok(OutputSection::Output1),
            "02" | "2" => Ok(OutputSection::Output2),
            "03" | "3" => Ok(OutputSection::Output3),
            other => Err(AppError::InvalidInput(format!(
                "output selector must be 01, 02 or 03, got '{other}'"
            ))),
        }
    }
}
