use crate::error::AppError;
use crate::model::exchange::{Exchange, Side};
use crate::model::requests::{OrderRequest, ReviseCancelRequest};
use crate::model::table::ResultTable;
use async_trait::async_trait;

/// Interface for the order service
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Places a cash order during regular hours
    ///
    /// # Returns
    /// * The `output` section: order number and time
    async fn order(&self, request: &OrderRequest) -> Result<ResultTable, AppError>;

    /// Revises or cancels a working order
    async fn order_revise_cancel(
        &self,
        request: &ReviseCancelRequest,
    ) -> Result<ResultTable, AppError>;

    /// Cancels every unfilled order on `exchange`, optionally only those for `symbol`
    ///
    /// # Returns
    /// * One receipt row per cancelled order
    async fn cancel_all_unfilled(
        &self,
        exchange: Exchange,
        symbol: Option<&str>,
    ) -> Result<ResultTable, AppError>;

    /// Places a limit order in the US daytime session
    async fn daytime_order(
        &self,
        side: Side,
        exchange: Exchange,
        symbol: &str,
        quantity: u64,
        price: f64,
    ) -> Result<ResultTable, AppError>;

    /// Revises or cancels a US daytime order
    async fn daytime_order_revise_cancel(
        &self,
        request: &ReviseCancelRequest,
    ) -> Result<ResultTable, AppError>;
}
