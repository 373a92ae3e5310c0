use crate::error::AppError;
use crate::model::exchange::OutputSection;
use crate::model::requests::{DailyPriceQuery, PeriodChartQuery, SearchCondition};
use crate::model::table::ResultTable;
use async_trait::async_trait;

/// Interface for quotes, charts and product data
///
/// `exchange` here is the quote service code (`NAS`, `NYS`, `AMS`, `HKS`,
/// `SHS`, `SZS`, `TSE`, `HNX`, `HSX`), not the trading one.
#[async_trait]
pub trait QuoteService: Send + Sync {
    /// Current price
    async fn price(&self, exchange: &str, symbol: &str) -> Result<ResultTable, AppError>;

    /// Daily, weekly or monthly bars (`output2`)
    async fn daily_price(&self, query: &DailyPriceQuery) -> Result<ResultTable, AppError>;

    /// Header of a period chart (`output1`)
    async fn period_chart_info(&self, query: &PeriodChartQuery)
    -> Result<ResultTable, AppError>;

    /// Bars of a period chart (`output2`)
    async fn period_chart(&self, query: &PeriodChartQuery) -> Result<ResultTable, AppError>;

    /// Symbols matching the filters; `view` is the summary (`Output1`) or the list (`Output2`)
    async fn condition_search(
        &self,
        condition: &SearchCondition,
        view: OutputSection,
    ) -> Result<ResultTable, AppError>;

    /// Settlement calendar from `base_date` on; today when empty
    async fn countries_holiday(&self, base_date: &str) -> Result<ResultTable, AppError>;

    /// Detailed current price
    async fn price_detail(&self, exchange: &str, symbol: &str)
    -> Result<ResultTable, AppError>;

    /// Minute bars of a symbol, last 120 records
    async fn minute_chart(
        &self,
        exchange: &str,
        symbol: &str,
        minutes: u32,
        include_previous_day: bool,
        view: OutputSection,
    ) -> Result<ResultTable, AppError>;

    /// Minute bars of an index
    async fn index_minute_chart(
        &self,
        market: &str,
        code: &str,
        hour_class: &str,
        include_past: bool,
        view: OutputSection,
    ) -> Result<ResultTable, AppError>;

    /// Product master data
    async fn search_info(&self, symbol: &str, product_type: &str)
    -> Result<ResultTable, AppError>;

    /// Order book; `view` picks the header, the levels or the extra quotes
    async fn asking_price(
        &self,
        exchange: &str,
        symbol: &str,
        view: OutputSection,
    ) -> Result<ResultTable, AppError>;
}
