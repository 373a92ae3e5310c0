/// Account and balance queries
pub mod account;
/// Order placement and management
pub mod order;
/// Quotes, charts and product data
pub mod quote;
/// Seam between request building and the HTTP stack
pub mod transport;
