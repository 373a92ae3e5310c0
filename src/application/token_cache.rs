/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Local credential cache
//!
//! One file per day, `{dir}/KIS{YYYYMMDD}`, holding a single JSON line with
//! the token, its expiry and the mode it was issued for. A token is only
//! reused when it has not expired and the mode matches.

use crate::application::config::TradingMode;
use crate::constants::{TOKEN_CACHE_PREFIX, TOKEN_EXPIRY_FORMAT};
use crate::error::AppError;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Persisted access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedToken {
    /// Bearer token
    pub token: String,
    /// Expiry, `%Y-%m-%d %H:%M:%S` local time
    pub valid_date: String,
    /// Mode the token was issued for
    pub mode: TradingMode,
}

impl CachedToken {
    /// Expiry as a timestamp, `None` when the stored text is malformed
    #[must_use]
    pub fn expires_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.valid_date, TOKEN_EXPIRY_FORMAT).ok()
    }

    /// Usable for `mode` at `now`
    #[must_use]
    pub fn is_valid_for(&self, mode: TradingMode, now: NaiveDateTime) -> bool {
        self.mode == mode && self.expires_at().is_some_and(|exp| exp > now)
    }
}

/// Reads and writes the per-day credential cache file
#[derive(Debug, Clone)]
pub struct TokenCache {
    dir: PathBuf,
}

impl TokenCache {
    /// Cache rooted at `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Cache file for `date`
    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}{}", TOKEN_CACHE_PREFIX, date.format("%Y%m%d")))
    }

    /// Cache file for today
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.path_for(Local::now().date_naive())
    }

    /// Reads today's entry, whatever its validity
    ///
    /// A missing file is `None`; an unreadable or corrupt one is logged and
    /// also `None`.
    #[must_use]
    pub fn read(&self) -> Option<CachedToken> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No credential cache at {}", path.display());
                return None;
            }
            Err(e) => {
                warn!("Cannot read credential cache {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<CachedToken>(content.trim()) {
            Ok(token) => Some(token),
            Err(e) => {
                warn!("Ignoring corrupt credential cache {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Today's entry if it can be reused for `mode` at `now`
    #[must_use]
    pub fn load(&self, mode: TradingMode, now: NaiveDateTime) -> Option<CachedToken> {
        let cached = self.read()?;
        if cached.is_valid_for(mode, now) {
            debug!("Reusing cached token valid until {}", cached.valid_date);
            Some(cached)
        } else {
            debug!(
                "Cached token not reusable (mode {}, valid until {})",
                cached.mode, cached.valid_date
            );
            None
        }
    }

    /// Overwrites today's entry
    pub fn store(&self, token: &CachedToken) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)?;
        let mut line = serde_json::to_string(token)?;
        line.push('\n');
        fs::write(self.path(), line)?;
        debug!("Credential cache written to {}", self.path().display());
        Ok(())
    }
}
