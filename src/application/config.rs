/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_CUSTTYPE, DEFAULT_PAGE_DELAY_MS, DEFAULT_PRODUCT_CODE, DEFAULT_PROD_URL,
    DEFAULT_REST_TIMEOUT, DEFAULT_VPS_URL, LIVE_MAX_REQUESTS_PER_SECOND,
    PAPER_MAX_REQUESTS_PER_SECOND, USER_AGENT,
};
use crate::error::AppError;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

/// Which KIS environment a client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TradingMode {
    /// Live trading (`prod`)
    #[serde(rename = "prod")]
    Live,
    /// Simulated trading (`vps`)
    #[default]
    #[serde(rename = "vps")]
    Paper,
    /// Development environment (`dev`)
    #[serde(rename = "dev")]
    Dev,
}

impl TradingMode {
    /// Short name stored in the credential cache and accepted by `KIS_MODE`
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TradingMode::Live => "prod",
            TradingMode::Paper => "vps",
            TradingMode::Dev => "dev",
        }
    }

    /// Simulated trading rewrites the `tr_id` prefix
    #[must_use]
    pub fn is_paper(&self) -> bool {
        matches!(self, TradingMode::Paper)
    }
}

impl fmt::Display for TradingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradingMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "live" | "real" => Ok(TradingMode::Live),
            "vps" | "paper" | "demo" => Ok(TradingMode::Paper),
            "dev" => Ok(TradingMode::Dev),
            other => Err(AppError::Config(format!("unknown trading mode '{other}'"))),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// App key pair and account of one environment
pub struct Credentials {
    /// Application key issued by KIS
    pub app_key: String,
    /// Application secret issued by KIS; written out masked
    #[serde(serialize_with = "serialize_masked")]
    pub app_secret: String,
    /// First 8 digits of the account number (`CANO`)
    pub account: String,
    /// Last 2 digits of the account number (`ACNT_PRDT_CD`)
    pub product_code: String,
}

/// Writes a non-empty secret as [`MASKED_SECRET`]
fn serialize_masked<S: serde::Serializer>(secret: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if secret.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str(MASKED_SECRET)
    }
}

/// Placeholder written in place of a secret
pub const MASKED_SECRET: &str = "********";

impl Credentials {
    /// True when key and secret are both present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.app_key.is_empty() && !self.app_secret.is_empty()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Base URL and credentials of one environment
pub struct EnvironmentConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Credentials used against `base_url`
    pub credentials: Credentials,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// `User-Agent` header value
    pub user_agent: String,
    /// `custtype` header value
    pub custtype: String,
    /// Sign POST bodies with a hashkey
    pub use_hashkey: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl RateLimiterConfig {
    /// Throughput the service accepts in each mode
    #[must_use]
    pub fn for_mode(mode: TradingMode) -> Self {
        let per_second = match mode {
            TradingMode::Live => LIVE_MAX_REQUESTS_PER_SECOND,
            TradingMode::Paper | TradingMode::Dev => PAPER_MAX_REQUESTS_PER_SECOND,
        };
        Self {
            max_requests: per_second,
            period_seconds: 1,
            burst_size: per_second,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the KIS client
pub struct Config {
    /// Environment the client runs against
    pub mode: TradingMode,
    /// Live environment
    pub live: EnvironmentConfig,
    /// Simulated trading environment
    pub paper: EnvironmentConfig,
    /// Development environment
    pub dev: EnvironmentConfig,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Directory holding the per-day credential cache file
    pub token_dir: String,
    /// Milliseconds to wait before requesting the next page of a listing
    pub page_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment and a local `.env` file
    ///
    /// Missing keys are logged, not fatal: the first request fails with
    /// `AppError::Unauthorized` instead.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let mode = get_env_or_none::<String>("KIS_MODE")
            .and_then(|m| match m.parse::<TradingMode>() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    error!("{e}, falling back to vps");
                    None
                }
            })
            .unwrap_or_default();

        let product_code = get_env_or_default("KIS_PRODUCT_CODE", DEFAULT_PRODUCT_CODE.to_string());
        let credentials = |prefix: &str| Credentials {
            app_key: get_env_or_default(&format!("{prefix}APP_KEY"), String::new()),
            app_secret: get_env_or_default(&format!("{prefix}APP_SECRET"), String::new()),
            account: get_env_or_default(&format!("{prefix}ACCOUNT"), String::new()),
            product_code: product_code.clone(),
        };

        let live = EnvironmentConfig {
            base_url: get_env_or_default("KIS_PROD_URL", DEFAULT_PROD_URL.to_string()),
            credentials: credentials("KIS_"),
        };
        let paper = EnvironmentConfig {
            base_url: get_env_or_default("KIS_VPS_URL", DEFAULT_VPS_URL.to_string()),
            credentials: credentials("KIS_PAPER_"),
        };
        let dev = EnvironmentConfig {
            base_url: get_env_or_default("KIS_DEV_URL", DEFAULT_VPS_URL.to_string()),
            credentials: credentials("KIS_DEV_"),
        };

        let defaults = RateLimiterConfig::for_mode(mode);
        let config = Config {
            mode,
            live,
            paper,
            dev,
            rest_api: RestApiConfig {
                timeout: get_env_or_default("KIS_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
                user_agent: get_env_or_default("KIS_USER_AGENT", USER_AGENT.to_string()),
                custtype: get_env_or_default("KIS_CUSTTYPE", DEFAULT_CUSTTYPE.to_string()),
                use_hashkey: get_env_flag("KIS_USE_HASHKEY"),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("KIS_RATE_LIMIT_MAX_REQUESTS", defaults.max_requests),
                period_seconds: get_env_or_default(
                    "KIS_RATE_LIMIT_PERIOD_SECONDS",
                    defaults.period_seconds,
                ),
                burst_size: get_env_or_default("KIS_RATE_LIMIT_BURST_SIZE", defaults.burst_size),
            },
            token_dir: get_env_or_default("KIS_TOKEN_DIR", String::from(".")),
            page_delay_ms: get_env_or_default("KIS_PAGE_DELAY_MS", DEFAULT_PAGE_DELAY_MS),
        };

        if !config.environment().credentials.is_complete() {
            error!(
                "app key/secret for mode '{}' not found in environment variables or .env file",
                config.mode
            );
        }
        config
    }

    /// Same configuration, pointed at another environment
    ///
    /// The rate limiter follows the new mode's default throughput.
    #[must_use]
    pub fn with_mode(mut self, mode: TradingMode) -> Self {
        if self.mode != mode {
            self.rate_limiter = RateLimiterConfig::for_mode(mode);
        }
        self.mode = mode;
        self
    }

    /// Environment selected by `mode`
    #[must_use]
    pub fn environment(&self) -> &EnvironmentConfig {
        match self.mode {
            TradingMode::Live => &self.live,
            TradingMode::Paper => &self.paper,
            TradingMode::Dev => &self.dev,
        }
    }

    /// Base URL of the selected environment
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.environment().base_url.trim_end_matches('/')
    }

    /// Checks that the selected environment can authenticate and place account queries
    pub fn validate(&self) -> Result<(), AppError> {
        let env = self.environment();
        if env.base_url.is_empty() {
            return Err(AppError::Config(format!("no base url for mode '{}'", self.mode)));
        }
        if !env.credentials.is_complete() {
            return Err(AppError::Config(format!(
                "app key/secret missing for mode '{}'",
                self.mode
            )));
        }
        Ok(())
    }
}
