/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the client
#[derive(Debug)]
pub enum AppError {
    /// Transport failure below HTTP (connect, timeout, TLS)
    Network(reqwest::Error),
    /// Local file access failure
    Io(std::io::Error),
    /// JSON could not be read or written
    Json(serde_json::Error),
    /// The server answered with a non-2xx status
    Unexpected(StatusCode),
    /// Token issuance was rejected or returned no token
    Unauthorized,
    /// The server answered 2xx but `rt_cd` was not `"0"`
    Api {
        /// Return code
        rt_cd: String,
        /// Message code
        msg_cd: String,
        /// Message text
        msg1: String,
    },
    /// A parameter failed local validation, no request was sent
    InvalidInput(String),
    /// A response could not be turned into the expected shape
    Deserialization(String),
    /// Configuration is missing or inconsistent
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Unexpected(s) => write!(f, "unexpected http status: {s}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Api {
                rt_cd,
                msg_cd,
                msg1,
            } => write!(f, "api error [{rt_cd}] {msg_cd}: {msg1}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AppError::Unexpected(status),
            None => AppError::Network(err),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl AppError {
    /// Returns true for a business failure reported in the response body
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, AppError::Api { .. })
    }

    /// Message code of a business failure, if this is one
    #[must_use]
    pub fn msg_cd(&self) -> Option<&str> {
        match self {
            AppError::Api { msg_cd, .. } => Some(msg_cd),
            _ => None,
        }
    }
}
