/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the KIS Open API
//!
//! This module handles:
//! - Access token issuance through `/oauth2/tokenP`
//! - Reuse of a cached token across process runs
//! - Re-issuance once a token is 24 hours old or past its expiry
//! - Hashkey signing of order bodies

use crate::application::config::{Config, TradingMode};
use crate::application::rate_limiter::RateLimiter;
use crate::application::token_cache::{CachedToken, TokenCache};
use crate::constants::{HASHKEY_PATH, TOKEN_EXPIRY_FORMAT, TOKEN_PATH, TOKEN_REFRESH_SECONDS};
use crate::error::AppError;
use crate::model::http::{Payload, make_http_request};
use crate::model::responses::{HashkeyResponse, TokenResponse};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use reqwest::{Client, Method, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Session information for authenticated requests
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token
    pub access_token: String,
    /// Expiry reported by the server, local time
    pub expires_at: NaiveDateTime,
    /// When this process obtained the token, from the server or the cache
    pub acquired_at: DateTime<Utc>,
    /// Mode the token belongs to
    pub mode: TradingMode,
}

impl Session {
    /// Checks if the token is past its expiry at `now` (local time)
    #[must_use]
    pub fn is_expired_at(&self, now: NaiveDateTime) -> bool {
        now >= self.expires_at
    }

    /// Checks if the token is past its expiry
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Local::now().naive_local())
    }

    /// Seconds since the token was acquired
    #[must_use]
    pub fn age_seconds(&self) -> i64 {
        (Utc::now() - self.acquired_at).num_seconds()
    }

    /// The token must be re-issued before the next request
    #[must_use]
    pub fn needs_refresh(&self) -> bool {
        self.age_seconds() > TOKEN_REFRESH_SECONDS || self.is_expired()
    }
}

/// Authentication manager for the KIS Open API
///
/// Holds the current session for one environment. The session is read on
/// every request and replaced when it needs refreshing.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
    rate_limiter: RateLimiter,
    cache: TokenCache,
}

impl Auth {
    /// Creates a new Auth instance sharing the client's HTTP stack and rate limiter
    pub fn new(config: Arc<Config>, client: Client, rate_limiter: RateLimiter) -> Self {
        let cache = TokenCache::new(&config.token_dir);
        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
            rate_limiter,
            cache,
        }
    }

    /// Gets the current session, ensuring the token is usable
    ///
    /// # Returns
    /// * `Ok(Session)` - Session with a fresh enough token
    /// * `Err(AppError)` - If token issuance fails
    pub async fn get_session(&self) -> Result<Session, AppError> {
        let session = self.session.read().await;

        if let Some(sess) = session.as_ref() {
            if !sess.needs_refresh() {
                return Ok(sess.clone());
            }
            debug!("Token is {}s old or expired, refreshing", sess.age_seconds());
        } else {
            info!("No active session, logging in");
        }

        drop(session);
        self.login().await
    }

    /// Loads a reusable token from the cache or issues a new one
    pub async fn login(&self) -> Result<Session, AppError> {
        let mode = self.config.mode;
        let now = Local::now().naive_local();

        let session = match self.cache.load(mode, now) {
            Some(cached) => session_from_cache(cached)?,
            None => self.issue_token().await?,
        };

        let mut sess = self.session.write().await;
        *sess = Some(session.clone());
        Ok(session)
    }

    /// Drops the in-memory session so that the next request logs in again
    pub async fn invalidate(&self) {
        let mut sess = self.session.write().await;
        *sess = None;
    }

    /// Requests a new token and writes it to the credential cache
    async fn issue_token(&self) -> Result<Session, AppError> {
        let credentials = &self.config.environment().credentials;
        if !credentials.is_complete() {
            error!("App key/secret missing for mode {}", self.config.mode);
            return Err(AppError::Unauthorized);
        }

        let url = format!("{}{}", self.config.base_url(), TOKEN_PATH);
        let body = json!({
            "grant_type": "client_credentials",
            "appkey": credentials.app_key,
            "appsecret": credentials.app_secret,
        });

        debug!("Sending token request to: {}", url);

        let response = make_http_request(
            &self.client,
            &self.rate_limiter,
            Method::POST,
            &url,
            vec![("content-type", "application/json")],
            Payload::Json(&body),
        )
        .await
        .map_err(|e| match e {
            AppError::Unexpected(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
                AppError::Unauthorized
            }
            other => other,
        })?;

        let token: TokenResponse = response.json().await?;
        if token.access_token.is_empty() {
            error!("Get Authentication token fail");
            return Err(AppError::Unauthorized);
        }

        let expires_at = NaiveDateTime::parse_from_str(
            &token.access_token_token_expired,
            TOKEN_EXPIRY_FORMAT,
        )
        .map_err(|e| {
            AppError::Deserialization(format!(
                "access_token_token_expired '{}': {e}",
                token.access_token_token_expired
            ))
        })?;

        let cached = CachedToken {
            token: token.access_token.clone(),
            valid_date: token.access_token_token_expired.clone(),
            mode: self.config.mode,
        };
        if let Err(e) = self.cache.store(&cached) {
            warn!("Could not write credential cache: {}", e);
        }

        info!("✓ Token issued for mode {}, valid until {}", self.config.mode, expires_at);
        Ok(Session {
            access_token: token.access_token,
            expires_at,
            acquired_at: Utc::now(),
            mode: self.config.mode,
        })
    }

    /// Signs a POST body, returning the value for the `hashkey` header
    pub async fn hashkey(&self, body: &Value) -> Result<String, AppError> {
        let credentials = &self.config.environment().credentials;
        let url = format!("{}{}", self.config.base_url(), HASHKEY_PATH);

        let response = make_http_request(
            &self.client,
            &self.rate_limiter,
            Method::POST,
            &url,
            vec![
                ("content-type", "application/json"),
                ("accept", "text/plain"),
                ("appkey", credentials.app_key.as_str()),
                ("appsecret", credentials.app_secret.as_str()),
            ],
            Payload::Json(body),
        )
        .await?;

        let hash: HashkeyResponse = response.json().await?;
        if hash.hash.is_empty() {
            return Err(AppError::Deserialization("hashkey response without HASH".to_string()));
        }
        Ok(hash.hash)
    }
}

fn session_from_cache(cached: CachedToken) -> Result<Session, AppError> {
    let expires_at = cached.expires_at().ok_or_else(|| {
        AppError::Deserialization(format!("cached valid-date '{}'", cached.valid_date))
    })?;
    info!("✓ Reusing cached token for mode {}", cached.mode);
    Ok(Session {
        access_token: cached.token,
        expires_at,
        acquired_at: Utc::now(),
        mode: cached.mode,
    })
}
