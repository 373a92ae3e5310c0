/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # KIS Overseas Client
//!
//! Async client for the Korea Investment & Securities (KIS) Open API, overseas
//! equities section: order placement and cancellation, balance and execution
//! inquiries, quotes and charts, plus the access token life cycle.
//!
//! Every call goes through one [`Client`](application::client::Client) built
//! from a [`Config`](application::config::Config). Responses come back as a
//! [`ResultTable`](model::table::ResultTable), an ordered table of text columns
//! that can be turned into typed records when the shape is known.
//!
//! ```ignore
//! use kis_overseas_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new())?;
//!     let holdings = client.inquire_balance_list(Exchange::Nasd, "USD").await?;
//!     println!("{holdings}");
//!     Ok(())
//! }
//! ```
//!
//! Listing endpoints are paged by the server. The [`Pager`](application::pager::Pager)
//! walks the `tr_cont` continuation protocol lazily, and each `*_list` style
//! operation collects every page into a single table.

/// Application layer: configuration, authentication, paging and services
pub mod application;

/// Crate-wide constants
pub mod constants;

/// Error type shared by every operation
pub mod error;

/// Wire level models: HTTP transport, envelopes, tables and cursors
pub mod model;

/// Commonly used imports
pub mod prelude;

/// Typed records built from result tables
pub mod presentation;

/// Helpers for environment variables, logging and dates
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
