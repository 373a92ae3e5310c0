/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::application::config::{Config, TradingMode};
use crate::application::pager::{Pager, fetch_table};
use crate::error::AppError;
use crate::model::cursor::CursorKeys;
use crate::model::http::HttpClient;
use crate::model::requests::RequestDescriptor;
use crate::model::table::ResultTable;
use std::sync::Arc;
use tracing::info;

/// Client for one KIS environment
///
/// Implements [`OrderService`](crate::application::interfaces::order::OrderService),
/// [`AccountService`](crate::application::interfaces::account::AccountService) and
/// [`QuoteService`](crate::application::interfaces::quote::QuoteService). Build one per
/// environment; authentication happens on the first call.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client without contacting the server
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client and obtains a token right away
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let client = Self::new(config)?;
        let session = client.login().await?;
        info!(
            "Connected to {} ({}), token valid until {}",
            client.config().base_url(),
            session.mode,
            session.expires_at
        );
        Ok(client)
    }

    /// Current session, issuing or reloading a token when needed
    pub async fn login(&self) -> Result<Session, AppError> {
        self.http_client.get_session().await
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    /// Environment in use
    #[must_use]
    pub fn mode(&self) -> TradingMode {
        self.config().mode
    }

    /// Underlying HTTP client
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http_client
    }

    /// Adds the account number parameters (`CANO`, `ACNT_PRDT_CD`) to `request`
    #[must_use]
    pub fn with_account(&self, request: RequestDescriptor) -> RequestDescriptor {
        let credentials = &self.config().environment().credentials;
        request
            .param("CANO", credentials.account.as_str())
            .param("ACNT_PRDT_CD", credentials.product_code.as_str())
    }

    /// One call, one section
    pub async fn fetch(
        &self,
        request: &RequestDescriptor,
        section: &str,
    ) -> Result<ResultTable, AppError> {
        fetch_table(self.http_client.as_ref(), request, section).await
    }

    /// Lazy pager over a listing
    pub fn pager(
        &self,
        request: RequestDescriptor,
        section: &str,
        keys: CursorKeys,
    ) -> Pager<'_, HttpClient> {
        Pager::new(self.http_client.as_ref(), request, section, keys)
    }

    /// Every page of a listing merged into one table
    pub async fn fetch_all(
        &self,
        request: RequestDescriptor,
        section: &str,
        keys: CursorKeys,
    ) -> Result<ResultTable, AppError> {
        self.pager(request, section, keys).collect().await
    }
}
