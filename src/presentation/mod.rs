/// Account records: holdings, unfilled orders and executions
pub mod account;
/// Quote records: current and daily prices
pub mod market;
/// Order receipts
pub mod order;
/// Serialization helpers for the API's text-encoded numbers
pub mod serialization;

pub use account::{Execution, Holding, UnfilledOrder};
pub use market::{CurrentPrice, DailyPrice};
pub use order::OrderReceipt;
