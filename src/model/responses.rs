/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{NO_DATA_MESSAGE, SUCCESS_CODE};
use crate::error::AppError;
use crate::model::cursor::{Cursor, CursorKeys};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

/// What came back from one HTTP call, before any interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// `tr_cont` response header, when present
    pub tr_cont: Option<String>,
    /// Parsed JSON body
    pub body: Value,
}

/// Body of every API response: a status triple plus named result sections
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseEnvelope {
    /// Return code, `"0"` on success
    pub rt_cd: String,
    /// Message code
    pub msg_cd: String,
    /// Human readable message
    pub msg1: String,
    /// Every other top-level key, in server order
    pub sections: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Splits a response body into status fields and sections
    pub fn from_value(body: Value) -> Result<Self, AppError> {
        let Value::Object(mut map) = body else {
            return Err(AppError::Deserialization(
                "response body is not a JSON object".to_string(),
            ));
        };

        let mut take = |key: &str| match map.shift_remove(key) {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        let rt_cd = take("rt_cd");
        let msg_cd = take("msg_cd");
        let msg1 = take("msg1");

        Ok(Self {
            rt_cd,
            msg_cd,
            msg1,
            sections: map,
        })
    }

    /// `rt_cd` is `"0"`
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.rt_cd == SUCCESS_CODE
    }

    /// The server found nothing to return
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        self.msg1.contains(NO_DATA_MESSAGE)
    }

    /// Turns a business failure into `AppError::Api`, logging the server message
    pub fn check(self) -> Result<Self, AppError> {
        if self.is_success() {
            return Ok(self);
        }
        error!("{},{}", self.msg_cd, self.msg1);
        Err(AppError::Api {
            rt_cd: self.rt_cd,
            msg_cd: self.msg_cd,
            msg1: self.msg1,
        })
    }

    /// A named result section, if present and not null
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections
            .get(name)
            .or_else(|| {
                self.sections
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)
            })
            .filter(|v| !v.is_null())
    }

    /// Continuation keys returned with this page
    #[must_use]
    pub fn cursor(&self, keys: CursorKeys) -> Cursor {
        Cursor::from_body(keys, &self.sections)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Response of `/oauth2/tokenP`
pub struct TokenResponse {
    /// Bearer token
    #[serde(default)]
    pub access_token: String,
    /// Local expiry timestamp, `%Y-%m-%d %H:%M:%S`
    #[serde(default)]
    pub access_token_token_expired: String,
    /// Always `Bearer`
    #[serde(default)]
    pub token_type: String,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: i64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Response of `/uapi/hashkey`
pub struct HashkeyResponse {
    /// Hash of the submitted body
    #[serde(rename = "HASH", default)]
    pub hash: String,
}
