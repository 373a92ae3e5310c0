use crate::error::AppError;
use crate::model::exchange::{Exchange, OutputSection};
use crate::model::requests::{
    ExecutionQuery, PaymentBalanceQuery, PresentBalanceQuery, ProfitQuery, TransactionQuery,
};
use crate::model::table::ResultTable;
use async_trait::async_trait;

/// Interface for the account service
///
/// Listing methods follow every page before returning.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Unfilled orders on one exchange
    async fn inquire_unfilled(&self, exchange: Exchange) -> Result<ResultTable, AppError>;

    /// Balance summary (`output2`)
    async fn inquire_balance(
        &self,
        exchange: Exchange,
        currency: &str,
    ) -> Result<ResultTable, AppError>;

    /// Holdings, one row per symbol (`output1`)
    async fn inquire_balance_list(
        &self,
        exchange: Exchange,
        currency: &str,
    ) -> Result<ResultTable, AppError>;

    /// Order and fill history
    async fn inquire_executions(&self, query: &ExecutionQuery) -> Result<ResultTable, AppError>;

    /// Present balance; `view` picks holdings, currency totals or account totals
    async fn inquire_present_balance(
        &self,
        view: OutputSection,
        query: &PresentBalanceQuery,
    ) -> Result<ResultTable, AppError>;

    /// Buying power for `item` at `price`
    async fn inquire_purchasable_amount(
        &self,
        exchange: Exchange,
        price: f64,
        item: &str,
    ) -> Result<ResultTable, AppError>;

    /// Realized profit totals (`output2`)
    async fn inquire_period_profit(&self, query: &ProfitQuery) -> Result<ResultTable, AppError>;

    /// Realized profit per trade (`output1`)
    async fn inquire_period_profit_by_item(
        &self,
        query: &ProfitQuery,
    ) -> Result<ResultTable, AppError>;

    /// Foreign currency margin, currencies with a code only
    async fn foreign_margin(&self) -> Result<ResultTable, AppError>;

    /// Transactions over a period (`output1`)
    async fn inquire_period_trans(
        &self,
        query: &TransactionQuery,
    ) -> Result<ResultTable, AppError>;

    /// Transaction totals over a period (`output2`)
    async fn inquire_period_trans_summary(
        &self,
        query: &TransactionQuery,
    ) -> Result<ResultTable, AppError>;

    /// Balance on payment-date basis; `view` picks the section
    async fn inquire_payment_balance(
        &self,
        view: OutputSection,
        query: &PaymentBalanceQuery,
    ) -> Result<ResultTable, AppError>;
}
