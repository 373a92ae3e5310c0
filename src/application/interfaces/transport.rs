/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_PAGE_DELAY_MS;
use crate::error::AppError;
use crate::model::requests::RequestDescriptor;
use crate::model::responses::RawResponse;
use async_trait::async_trait;
use std::time::Duration;

/// Sends one request descriptor and hands back the raw answer
///
/// Implemented by [`HttpClient`](crate::model::http::HttpClient); the pager
/// and the fetch helpers only see this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs the call with the given `tr_cont` request header
    async fn execute(
        &self,
        request: &RequestDescriptor,
        tr_cont: &str,
    ) -> Result<RawResponse, AppError>;

    /// Pause before asking for the next page of a listing
    fn page_delay(&self) -> Duration {
        Duration::from_millis(DEFAULT_PAGE_DELAY_MS)
    }
}
