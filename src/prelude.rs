/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # KIS Overseas Client Prelude
//!
//! Brings the commonly used types and traits into scope with one import.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kis_overseas_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = Client::connect(Config::new()).await?;
//! let unfilled = client.inquire_unfilled(Exchange::Nasd).await?;
//! println!("{unfilled}");
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration of the client
pub use crate::application::config::{
    Config, Credentials, EnvironmentConfig, RateLimiterConfig, RestApiConfig, TradingMode,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND CLIENT
// ============================================================================

/// Session and token handling
pub use crate::application::auth::{Auth, Session};

/// Credential cache
pub use crate::application::token_cache::{CachedToken, TokenCache};

/// Client bound to one environment
pub use crate::application::client::Client;

/// HTTP transport
pub use crate::model::http::HttpClient;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Service traits implemented by [`Client`]
pub use crate::application::interfaces::{
    account::AccountService, order::OrderService, quote::QuoteService, transport::Transport,
};

// ============================================================================
// PAGINATION
// ============================================================================

/// Paginated fetcher and single-call helpers
pub use crate::application::pager::{Pager, fetch_envelope, fetch_table};

/// Continuation state and cursor keys
pub use crate::model::cursor::{Continuation, Cursor, CursorKeys};

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

/// Exchanges, sides and output selectors
pub use crate::model::exchange::{Exchange, OutputSection, RevisionAction, Side};

/// Request descriptors and query parameters
pub use crate::model::requests::{
    ApiMethod, DailyPriceQuery, ExecutionQuery, OrderRequest, PaymentBalanceQuery,
    PeriodChartQuery, PresentBalanceQuery, ProfitQuery, Range, RequestDescriptor,
    ReviseCancelRequest, SearchCondition, TransactionQuery,
};

/// Response envelope
pub use crate::model::responses::{RawResponse, ResponseEnvelope};

/// Result table
pub use crate::model::table::{ResultTable, RowRef};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Typed records read from result tables
pub use crate::presentation::{
    CurrentPrice, DailyPrice, Execution, Holding, OrderReceipt, UnfilledOrder,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Rate limiting
pub use crate::application::rate_limiter::RateLimiter;

/// Logging
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
