/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! The API sends every number as text, with `""` standing for "not set".

/// Text number to `Option<f64>`; `""`, blanks and null become `None`
pub mod string_as_float_opt {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes back to the API's text form
    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_str(&v.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    /// Parses a text number, tolerating surrounding blanks
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse::<f64>().map(Some).map_err(serde::de::Error::custom),
        }
    }
}

/// `Y`/`N` flag to `Option<bool>`
pub mod yes_no_opt {
    use serde::{Deserialize, Deserializer};

    /// `Y` is true, `N` is false, anything else is `None`
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::trim) {
            Some("Y") | Some("y") => Some(true),
            Some("N") | Some("n") => Some(false),
            _ => None,
        })
    }
}
