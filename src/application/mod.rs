/// Token issuance, reuse and hashkey signing
pub mod auth;
/// Client bound to one environment
pub mod client;
/// Configuration loaded from the environment
pub mod config;
/// Path, verb and transaction identifier of every operation
pub mod endpoints;
/// Service traits and the transport seam
pub mod interfaces;
/// Single-call fetch and the paginated fetcher
pub mod pager;
/// Request pacing
pub mod rate_limiter;
/// Service implementations on `Client`
pub mod services;
/// Per-day credential cache on disk
pub mod token_cache;
