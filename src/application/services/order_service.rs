/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::endpoints::{
    DAYTIME_ORDER, DAYTIME_REVISE_CANCEL, ORDER, ORDER_REVISE_CANCEL, daytime_order_tr_id,
    order_tr_id, revise_cancel_tr_id,
};
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::order::OrderService;
use crate::error::AppError;
use crate::model::exchange::{Exchange, Side};
use crate::model::requests::{
    OrderRequest, RequestDescriptor, ReviseCancelRequest, format_price,
};
use crate::model::table::ResultTable;
use async_trait::async_trait;
use tracing::{debug, info, warn};

impl Client {
    fn revise_cancel_request(
        &self,
        base: RequestDescriptor,
        request: &ReviseCancelRequest,
    ) -> RequestDescriptor {
        self.with_account(base)
            .param("OVRS_EXCG_CD", request.exchange.code())
            .param("PDNO", request.symbol.as_str())
            .param("ORGN_ODNO", request.original_order_no.as_str())
            .param("RVSE_CNCL_DVSN_CD", request.action.code())
            .param("ORD_QTY", request.quantity.to_string())
            .param("OVRS_ORD_UNPR", format_price(request.price))
            .param("CTAC_TLNO", "")
            .param("MGCO_APTM_ODNO", "")
            .param("ORD_SVR_DVSN_CD", "0")
    }
}

#[async_trait]
impl OrderService for Client {
    async fn order(&self, request: &OrderRequest) -> Result<ResultTable, AppError> {
        request.validate()?;
        let tr_id = order_tr_id(request.side, request.exchange);
        let req = self
            .with_account(ORDER.request_with(tr_id))
            .param("OVRS_EXCG_CD", request.exchange.code())
            .param("PDNO", request.symbol.as_str())
            .param("ORD_DVSN", request.ord_dvsn.as_str())
            .param("ORD_QTY", request.quantity.to_string())
            .param("OVRS_ORD_UNPR", format_price(request.price))
            .param("CTAC_TLNO", "")
            .param("MGCO_APTM_ODNO", "")
            .param("SLL_TYPE", request.side.sll_type())
            .param("ORD_SVR_DVSN_CD", "0");

        info!(
            "Placing {} order on {}: {} x {} @ {}",
            request.side, request.exchange, request.symbol, request.quantity, request.price
        );
        let receipt = self.fetch(&req, "output").await?;
        debug!("Order accepted: {:?}", receipt.get(0, "ODNO"));
        Ok(receipt)
    }

    async fn order_revise_cancel(
        &self,
        request: &ReviseCancelRequest,
    ) -> Result<ResultTable, AppError> {
        request.validate()?;
        let base = ORDER_REVISE_CANCEL.request_with(revise_cancel_tr_id(request.exchange));
        let req = self.revise_cancel_request(base, request);

        info!(
            "{:?} order {} on {}",
            request.action, request.original_order_no, request.exchange
        );
        self.fetch(&req, "output").await
    }

    async fn cancel_all_unfilled(
        &self,
        exchange: Exchange,
        symbol: Option<&str>,
    ) -> Result<ResultTable, AppError> {
        let unfilled = self.inquire_unfilled(exchange).await?;
        let targets = unfilled.filter(|row| match symbol {
            Some(s) if !s.is_empty() => row.get("pdno") == Some(s),
            _ => true,
        });

        if targets.is_empty() {
            info!("No unfilled orders on {}", exchange);
            return Ok(ResultTable::default());
        }
        info!("Cancelling {} unfilled orders on {}", targets.len(), exchange);

        let mut receipts = ResultTable::default();
        for row in targets.rows() {
            let odno = row.get("odno").unwrap_or_default();
            let row_exchange = row
                .get("ovrs_excg_cd")
                .and_then(|code| code.parse::<Exchange>().ok())
                .unwrap_or(exchange);
            let cancel = ReviseCancelRequest::cancel(
                row_exchange,
                row.get("pdno").unwrap_or_default(),
                odno,
                0,
            );

            match self.order_revise_cancel(&cancel).await {
                Ok(receipt) => receipts.merge(receipt),
                Err(e) if e.is_api() => warn!("Cancel of order {} rejected: {}", odno, e),
                Err(e) => return Err(e),
            }
        }
        Ok(receipts)
    }

    async fn daytime_order(
        &self,
        side: Side,
        exchange: Exchange,
        symbol: &str,
        quantity: u64,
        price: f64,
    ) -> Result<ResultTable, AppError> {
        if !exchange.is_us() {
            return Err(AppError::InvalidInput(format!(
                "daytime orders are only available on US exchanges, got {exchange}"
            )));
        }
        // Daytime session only takes limit orders
        let order = OrderRequest::limit(side, exchange, symbol, quantity, price);
        order.validate()?;

        let req = self
            .with_account(DAYTIME_ORDER.request_with(daytime_order_tr_id(side)))
            .param("OVRS_EXCG_CD", exchange.code())
            .param("PDNO", symbol)
            .param("ORD_DVSN", "00")
            .param("ORD_QTY", quantity.to_string())
            .param("OVRS_ORD_UNPR", format_price(price))
            .param("CTAC_TLNO", "")
            .param("MGCO_APTM_ODNO", "")
            .param("ORD_SVR_DVSN_CD", "0");

        info!(
            "Placing daytime {} order on {}: {} x {} @ {}",
            side, exchange, symbol, quantity, price
        );
        self.fetch(&req, "output").await
    }

    async fn daytime_order_revise_cancel(
        &self,
        request: &ReviseCancelRequest,
    ) -> Result<ResultTable, AppError> {
        if request.symbol.trim().is_empty() {
            return Err(AppError::InvalidInput("symbol (PDNO) is required".to_string()));
        }
        request.validate()?;
        let req = self.revise_cancel_request(DAYTIME_REVISE_CANCEL.request(), request);
        self.fetch(&req, "output").await
    }
}
