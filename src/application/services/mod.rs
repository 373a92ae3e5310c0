/// Account and balance queries implemented on `Client`
pub mod account_service;
/// Order placement and management implemented on `Client`
pub mod order_service;
/// Quotes and charts implemented on `Client`
pub mod quote_service;
