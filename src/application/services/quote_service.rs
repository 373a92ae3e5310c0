/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::endpoints::{
    ASKING_PRICE, COUNTRIES_HOLIDAY, DAILY_CHART_PRICE, DAILY_PRICE, INQUIRE_SEARCH, PRICE,
    PRICE_DETAIL, SEARCH_INFO, TIME_INDEX_CHART_PRICE, TIME_ITEM_CHART_PRICE,
};
use crate::application::interfaces::quote::QuoteService;
use crate::error::AppError;
use crate::model::cursor::CursorKeys;
use crate::model::exchange::OutputSection;
use crate::model::requests::{
    DailyPriceQuery, PeriodChartQuery, RequestDescriptor, SearchCondition,
};
use crate::model::table::ResultTable;
use crate::utils::dates::date_or_today;
use async_trait::async_trait;

/// Quote endpoints address a symbol by exchange and code
fn require_symbol(exchange: &str, symbol: &str) -> Result<(), AppError> {
    if exchange.trim().is_empty() {
        return Err(AppError::InvalidInput("exchange (EXCD) is required".to_string()));
    }
    if symbol.trim().is_empty() {
        return Err(AppError::InvalidInput("symbol (SYMB) is required".to_string()));
    }
    Ok(())
}

/// Inquiries that only have a header block and a row list
fn two_part_view(view: OutputSection) -> Result<&'static str, AppError> {
    match view {
        OutputSection::Output1 | OutputSection::Output2 => Ok(view.key()),
        OutputSection::Output3 => Err(AppError::InvalidInput(
            "this inquiry only has output1 and output2".to_string(),
        )),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Y" } else { "N" }
}

fn symbol_request(request: RequestDescriptor, exchange: &str, symbol: &str) -> RequestDescriptor {
    request
        .param("AUTH", "")
        .param("EXCD", exchange)
        .param("SYMB", symbol)
}

impl Client {
    fn period_chart_request(
        &self,
        query: &PeriodChartQuery,
    ) -> Result<RequestDescriptor, AppError> {
        let (start, end) = query.dates()?;
        Ok(DAILY_CHART_PRICE
            .request()
            .param("FID_COND_MRKT_DIV_CODE", query.market.as_str())
            .param("FID_INPUT_ISCD", query.code.as_str())
            .param("FID_INPUT_DATE_1", start)
            .param("FID_INPUT_DATE_2", end)
            .param("FID_PERIOD_DIV_CODE", query.period.as_str()))
    }
}

#[async_trait]
impl QuoteService for Client {
    async fn price(&self, exchange: &str, symbol: &str) -> Result<ResultTable, AppError> {
        require_symbol(exchange, symbol)?;
        let req = symbol_request(PRICE.request(), exchange, symbol);
        self.fetch(&req, "output").await
    }

    async fn daily_price(&self, query: &DailyPriceQuery) -> Result<ResultTable, AppError> {
        require_symbol(&query.exchange, &query.symbol)?;
        let req = symbol_request(DAILY_PRICE.request(), &query.exchange, &query.symbol)
            .param("GUBN", query.period.as_str())
            .param("BYMD", date_or_today(&query.base_date, "base_date")?)
            .param("MODP", query.adjusted.as_str())
            .param("KEYB", "");
        self.fetch(&req, "output2").await
    }

    async fn period_chart_info(
        &self,
        query: &PeriodChartQuery,
    ) -> Result<ResultTable, AppError> {
        let req = self.period_chart_request(query)?;
        self.fetch(&req, "output1").await
    }

    async fn period_chart(&self, query: &PeriodChartQuery) -> Result<ResultTable, AppError> {
        let req = self.period_chart_request(query)?;
        self.fetch(&req, "output2").await
    }

    async fn condition_search(
        &self,
        condition: &SearchCondition,
        view: OutputSection,
    ) -> Result<ResultTable, AppError> {
        if condition.exchange.trim().is_empty() {
            return Err(AppError::InvalidInput("exchange (EXCD) is required".to_string()));
        }
        let section = two_part_view(view)?;
        let mut req = INQUIRE_SEARCH.request();
        for (name, value) in condition.params() {
            req.set(name, value);
        }
        self.fetch(&req, section).await
    }

    async fn countries_holiday(&self, base_date: &str) -> Result<ResultTable, AppError> {
        let req = COUNTRIES_HOLIDAY
            .request()
            .param("TRAD_DT", date_or_today(base_date, "base_date")?);
        self.fetch_all(req, "output", CursorKeys::Plain).await
    }

    async fn price_detail(
        &self,
        exchange: &str,
        symbol: &str,
    ) -> Result<ResultTable, AppError> {
        require_symbol(exchange, symbol)?;
        let req = symbol_request(PRICE_DETAIL.request(), exchange, symbol);
        self.fetch(&req, "output").await
    }

    async fn minute_chart(
        &self,
        exchange: &str,
        symbol: &str,
        minutes: u32,
        include_previous_day: bool,
        view: OutputSection,
    ) -> Result<ResultTable, AppError> {
        require_symbol(exchange, symbol)?;
        if minutes == 0 {
            return Err(AppError::InvalidInput("minute interval must not be 0".to_string()));
        }
        let section = two_part_view(view)?;
        let pinc = if include_previous_day { "1" } else { "0" };
        let req = symbol_request(TIME_ITEM_CHART_PRICE.request(), exchange, symbol)
            .param("NMIN", minutes.to_string())
            .param("PINC", pinc)
            .param("NEXT", "")
            .param("NREC", "120")
            .param("FILL", "")
            .param("KEYB", "");
        self.fetch(&req, section).await
    }

    async fn index_minute_chart(
        &self,
        market: &str,
        code: &str,
        hour_class: &str,
        include_past: bool,
        view: OutputSection,
    ) -> Result<ResultTable, AppError> {
        if code.trim().is_empty() {
            return Err(AppError::InvalidInput("index code is required".to_string()));
        }
        let section = two_part_view(view)?;
        let req = TIME_INDEX_CHART_PRICE
            .request()
            .param("FID_COND_MRKT_DIV_CODE", market)
            .param("FID_INPUT_ISCD", code)
            .param("FID_HOUR_CLS_CODE", hour_class)
            .param("FID_PW_DATA_INCU_YN", yes_no(include_past));
        self.fetch(&req, section).await
    }

    async fn search_info(
        &self,
        symbol: &str,
        product_type: &str,
    ) -> Result<ResultTable, AppError> {
        if symbol.trim().is_empty() {
            return Err(AppError::InvalidInput("symbol (PDNO) is required".to_string()));
        }
        let req = SEARCH_INFO
            .request()
            .param("PDNO", symbol)
            .param("PRDT_TYPE_CD", product_type);
        self.fetch(&req, "output").await
    }

    async fn asking_price(
        &self,
        exchange: &str,
        symbol: &str,
        view: OutputSection,
    ) -> Result<ResultTable, AppError> {
        require_symbol(exchange, symbol)?;
        let req = symbol_request(ASKING_PRICE.request(), exchange, symbol);
        self.fetch(&req, view.key()).await
    }
}
