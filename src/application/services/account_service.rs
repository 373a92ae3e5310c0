/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::endpoints::{
    FOREIGN_MARGIN, INQUIRE_BALANCE, INQUIRE_CCNL, INQUIRE_NCCS, INQUIRE_PAYMENT_BALANCE,
    INQUIRE_PERIOD_PROFIT, INQUIRE_PERIOD_TRANS, INQUIRE_PRESENT_BALANCE, INQUIRE_PSAMOUNT,
};
use crate::application::interfaces::account::AccountService;
use crate::error::AppError;
use crate::model::cursor::CursorKeys;
use crate::model::exchange::{Exchange, OutputSection};
use crate::model::requests::{
    ExecutionQuery, PaymentBalanceQuery, PresentBalanceQuery, ProfitQuery, RequestDescriptor,
    TransactionQuery, format_price,
};
use crate::model::table::ResultTable;
use crate::utils::dates::date_or_today;
use async_trait::async_trait;
use tracing::debug;

impl Client {
    fn balance_request(&self, exchange: Exchange, currency: &str) -> RequestDescriptor {
        self.with_account(INQUIRE_BALANCE.request())
            .param("OVRS_EXCG_CD", exchange.code())
            .param("TR_CRCY_CD", currency)
    }

    fn period_profit_request(&self, query: &ProfitQuery) -> Result<RequestDescriptor, AppError> {
        Ok(self
            .with_account(INQUIRE_PERIOD_PROFIT.request())
            .param("OVRS_EXCG_CD", query.exchange.as_str())
            .param("NATN_CD", "")
            .param("CRCY_CD", query.currency.as_str())
            .param("PDNO", query.symbol.as_str())
            .param("INQR_STRT_DT", date_or_today(&query.start_date, "start_date")?)
            .param("INQR_END_DT", date_or_today(&query.end_date, "end_date")?)
            .param("WCRC_FRCR_DVSN_CD", "02"))
    }

    fn period_trans_request(
        &self,
        query: &TransactionQuery,
    ) -> Result<RequestDescriptor, AppError> {
        Ok(self
            .with_account(INQUIRE_PERIOD_TRANS.request())
            .param("ERLM_STRT_DT", date_or_today(&query.start_date, "start_date")?)
            .param("ERLM_END_DT", date_or_today(&query.end_date, "end_date")?)
            .param("OVRS_EXCG_CD", query.exchange.as_str())
            .param("PDNO", query.symbol.as_str())
            .param("SLL_BUY_DVSN_CD", query.side.as_str())
            .param("LOAN_DVSN_CD", ""))
    }
}

/// Adds empty cursor parameters to a single-page call on a pageable endpoint
fn first_page(mut request: RequestDescriptor, keys: CursorKeys) -> RequestDescriptor {
    let (fk, nk) = keys.request_names();
    request.set(fk, "");
    request.set(nk, "");
    request
}

#[async_trait]
impl AccountService for Client {
    async fn inquire_unfilled(&self, exchange: Exchange) -> Result<ResultTable, AppError> {
        let req = self
            .with_account(INQUIRE_NCCS.request())
            .param("OVRS_EXCG_CD", exchange.code())
            .param("SORT_SQN", "DS");
        self.fetch_all(req, "output", CursorKeys::Width200).await
    }

    async fn inquire_balance(
        &self,
        exchange: Exchange,
        currency: &str,
    ) -> Result<ResultTable, AppError> {
        let req = first_page(self.balance_request(exchange, currency), CursorKeys::Width200);
        self.fetch(&req, "output2").await
    }

    async fn inquire_balance_list(
        &self,
        exchange: Exchange,
        currency: &str,
    ) -> Result<ResultTable, AppError> {
        let req = self.balance_request(exchange, currency);
        self.fetch_all(req, "output1", CursorKeys::Width200).await
    }

    async fn inquire_executions(&self, query: &ExecutionQuery) -> Result<ResultTable, AppError> {
        let req = self
            .with_account(INQUIRE_CCNL.request())
            .param("PDNO", query.symbol.as_str())
            .param("ORD_STRT_DT", date_or_today(&query.start_date, "start_date")?)
            .param("ORD_END_DT", date_or_today(&query.end_date, "end_date")?)
            .param("SLL_BUY_DVSN", query.side.as_str())
            .param("CCLD_NCCS_DVSN", query.fill_state.as_str())
            .param("OVRS_EXCG_CD", query.exchange.as_str())
            .param("SORT_SQN", query.sort.as_str())
            .param("ORD_DT", "")
            .param("ORD_GNO_BRNO", "")
            .param("ODNO", "");
        self.fetch_all(req, "output", CursorKeys::Width200).await
    }

    async fn inquire_present_balance(
        &self,
        view: OutputSection,
        query: &PresentBalanceQuery,
    ) -> Result<ResultTable, AppError> {
        let req = self
            .with_account(INQUIRE_PRESENT_BALANCE.request())
            .param("WCRC_FRCR_DVSN_CD", query.currency_kind.as_str())
            .param("NATN_CD", query.nation.as_str())
            .param("TR_MKET_CD", query.market.as_str())
            .param("INQR_DVSN_CD", query.inquiry_kind.as_str());
        self.fetch(&req, view.key()).await
    }

    async fn inquire_purchasable_amount(
        &self,
        exchange: Exchange,
        price: f64,
        item: &str,
    ) -> Result<ResultTable, AppError> {
        if item.trim().is_empty() {
            return Err(AppError::InvalidInput("item code (ITEM_CD) is required".to_string()));
        }
        let req = self
            .with_account(INQUIRE_PSAMOUNT.request())
            .param("OVRS_EXCG_CD", exchange.code())
            .param("OVRS_ORD_UNPR", format_price(price))
            .param("ITEM_CD", item);
        self.fetch(&req, "output").await
    }

    async fn inquire_period_profit(&self, query: &ProfitQuery) -> Result<ResultTable, AppError> {
        let req = first_page(self.period_profit_request(query)?, CursorKeys::Width200);
        self.fetch(&req, "output2").await
    }

    async fn inquire_period_profit_by_item(
        &self,
        query: &ProfitQuery,
    ) -> Result<ResultTable, AppError> {
        let req = self.period_profit_request(query)?;
        self.fetch_all(req, "output1", CursorKeys::Width200).await
    }

    async fn foreign_margin(&self) -> Result<ResultTable, AppError> {
        let req = self.with_account(FOREIGN_MARGIN.request());
        let margin = self.fetch(&req, "output").await?;
        let filled = margin.filter(|row| row.get("crcy_cd").is_some_and(|c| !c.is_empty()));
        debug!(
            "Foreign margin: {} of {} currency rows kept",
            filled.len(),
            margin.len()
        );
        Ok(filled)
    }

    async fn inquire_period_trans(
        &self,
        query: &TransactionQuery,
    ) -> Result<ResultTable, AppError> {
        let req = self.period_trans_request(query)?;
        self.fetch_all(req, "output1", CursorKeys::Width100).await
    }

    async fn inquire_period_trans_summary(
        &self,
        query: &TransactionQuery,
    ) -> Result<ResultTable, AppError> {
        let req = first_page(self.period_trans_request(query)?, CursorKeys::Width100);
        self.fetch(&req, "output2").await
    }

    async fn inquire_payment_balance(
        &self,
        view: OutputSection,
        query: &PaymentBalanceQuery,
    ) -> Result<ResultTable, AppError> {
        let req = self
            .with_account(INQUIRE_PAYMENT_BALANCE.request())
            .param("BASS_DT", date_or_today(&query.base_date, "base_date")?)
            .param("WCRC_FRCR_DVSN_CD", query.currency_kind.as_str())
            .param("INQR_DVSN_CD", query.inquiry_kind.as_str());
        self.fetch(&req, view.key()).await
    }
}
