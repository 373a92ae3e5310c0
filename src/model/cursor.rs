/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Continuation protocol of paged listings
//!
//! The client sends `tr_cont` empty on the first call and `N` afterwards. The
//! server answers `F` or `M` while more pages remain and `D` or `E` on the
//! last one, and returns a pair of opaque keys to echo back unchanged.

use serde_json::{Map, Value};

/// Where a paged listing stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Continuation {
    /// Nothing fetched yet
    #[default]
    First,
    /// The server has more pages
    More,
    /// The last page has been received
    Last,
}

impl Continuation {
    /// Reads the `tr_cont` response header; a missing or unknown value ends the listing
    #[must_use]
    pub fn from_header(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("F") | Some("M") => Continuation::More,
            _ => Continuation::Last,
        }
    }

    /// `tr_cont` request header for the next call
    #[must_use]
    pub fn request_header(&self) -> &'static str {
        match self {
            Continuation::More => "N",
            Continuation::First | Continuation::Last => "",
        }
    }
}

/// Naming of the continuation keys, which differs between endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKeys {
    /// `CTX_AREA_FK200` / `CTX_AREA_NK200`
    Width200,
    /// `CTX_AREA_FK100` / `CTX_AREA_NK100`
    Width100,
    /// `CTX_AREA_FK` / `CTX_AREA_NK`
    Plain,
}

impl CursorKeys {
    /// Parameter names sent with the request
    #[must_use]
    pub fn request_names(&self) -> (&'static str, &'static str) {
        match self {
            CursorKeys::Width200 => ("CTX_AREA_FK200", "CTX_AREA_NK200"),
            CursorKeys::Width100 => ("CTX_AREA_FK100", "CTX_AREA_NK100"),
            CursorKeys::Plain => ("CTX_AREA_FK", "CTX_AREA_NK"),
        }
    }
}

/// Opaque pair of keys returned by the server to resume a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Search condition key
    pub fk: String,
    /// Continuation key
    pub nk: String,
}

impl Cursor {
    /// Reads the cursor from the top level of a response body
    ///
    /// Key case varies between endpoints, so the lookup ignores it.
    #[must_use]
    pub fn from_body(keys: CursorKeys, body: &Map<String, Value>) -> Self {
        let (fk, nk) = keys.request_names();
        Self {
            fk: lookup(body, fk),
            nk: lookup(body, nk),
        }
    }

    /// True before the first page
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fk.is_empty() && self.nk.is_empty()
    }
}

fn lookup(body: &Map<String, Value>, name: &str) -> String {
    body.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .and_then(|(_, v)| v.as_str())
        .map(|s| s.to_string())
        .unwrap_or_default()
}
