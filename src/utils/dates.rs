/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

static YYYYMMDD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}(0[1-9]|1[0-2])(0[1-9]|[12]\d|3[01])$").expect("static regex")
});

/// Today's local date as `YYYYMMDD`
#[must_use]
pub fn today_yyyymmdd() -> String {
    Local::now().format("%Y%m%d").to_string()
}

/// Returns `date` or today when it is empty, rejecting anything that is not `YYYYMMDD`
pub fn date_or_today(date: &str, field: &str) -> Result<String, AppError> {
    if date.is_empty() {
        return Ok(today_yyyymmdd());
    }
    validate_yyyymmdd(date, field)?;
    Ok(date.to_string())
}

/// Checks that `date` looks like `YYYYMMDD`
pub fn validate_yyyymmdd(date: &str, field: &str) -> Result<(), AppError> {
    if YYYYMMDD.is_match(date) {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "{field} must be YYYYMMDD, got '{date}'"
        )))
    }
}
