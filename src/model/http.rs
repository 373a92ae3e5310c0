/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::auth::{Auth, Session};
use crate::application::config::{Config, TradingMode};
use crate::application::interfaces::transport::Transport;
use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use crate::model::requests::{ApiMethod, RequestDescriptor};
use crate::model::responses::RawResponse;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Payload of an outgoing request
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    /// Query string parameters
    Query(&'a [(String, String)]),
    /// JSON body
    Json(&'a Value),
}

/// Authenticated client for the KIS REST API
///
/// Resolves the access token through [`Auth`], builds the KIS headers,
/// rewrites `tr_id` in simulated mode and paces every call through the
/// shared rate limiter.
pub struct HttpClient {
    auth: Arc<Auth>,
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: RateLimiter,
}

impl HttpClient {
    /// Creates a client without performing authentication
    ///
    /// The token is obtained on the first request.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let http_client = build_http_client(&config)?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);
        let auth = Arc::new(Auth::new(
            config.clone(),
            http_client.clone(),
            rate_limiter.clone(),
        ));

        Ok(Self {
            auth,
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Gets the current session, issuing a token when needed
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.auth.get_session().await
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Configuration the client was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends one request and returns the `tr_cont` header with the parsed body
    pub async fn send(
        &self,
        request: &RequestDescriptor,
        tr_cont: &str,
    ) -> Result<RawResponse, AppError> {
        let session = self.auth.get_session().await?;
        let url = format!("{}{}", self.config.base_url(), request.path);
        let tr_id = effective_tr_id(&request.tr_id, self.config.mode);
        let credentials = &self.config.environment().credentials;
        let bearer = format!("Bearer {}", session.access_token);

        let body = match request.method {
            ApiMethod::Post => Some(request.body()),
            ApiMethod::Get => None,
        };
        let hashkey = match &body {
            Some(b) if self.config.rest_api.use_hashkey => Some(self.auth.hashkey(b).await?),
            _ => None,
        };

        let mut headers = vec![
            ("content-type", "application/json"),
            ("accept", "text/plain"),
            ("charset", "UTF-8"),
            ("authorization", bearer.as_str()),
            ("appkey", credentials.app_key.as_str()),
            ("appsecret", credentials.app_secret.as_str()),
            ("tr_id", tr_id.as_str()),
            ("custtype", self.config.rest_api.custtype.as_str()),
            ("tr_cont", tr_cont),
        ];
        if let Some(hash) = &hashkey {
            headers.push(("hashkey", hash.as_str()));
        }

        debug!("TR: {} params: {:?}", tr_id, request.params);

        let (method, payload) = match &body {
            Some(b) => (Method::POST, Payload::Json(b)),
            None => (Method::GET, Payload::Query(&request.params)),
        };

        let response = make_http_request(
            &self.http_client,
            &self.rate_limiter,
            method,
            &url,
            headers,
            payload,
        )
        .await?;

        let tr_cont = response
            .headers()
            .get("tr_cont")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body: Value = response.json().await?;
        debug!("TR: {} tr_cont: {:?}", tr_id, tr_cont);

        Ok(RawResponse { tr_cont, body })
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(
        &self,
        request: &RequestDescriptor,
        tr_cont: &str,
    ) -> Result<RawResponse, AppError> {
        self.send(request, tr_cont).await
    }

    fn page_delay(&self) -> Duration {
        Duration::from_millis(self.config.page_delay_ms)
    }
}

/// Builds the underlying reqwest client with the configured user agent and timeout
pub fn build_http_client(config: &Config) -> Result<Client, AppError> {
    Ok(Client::builder()
        .user_agent(config.rest_api.user_agent.as_str())
        .timeout(Duration::from_secs(config.rest_api.timeout))
        .build()?)
}

/// Transaction identifier as sent for `mode`
///
/// Simulated trading uses the same identifiers with a leading `V` in place of
/// `T`, `J` or `C`.
#[must_use]
pub fn effective_tr_id(tr_id: &str, mode: TradingMode) -> String {
    if mode.is_paper() {
        if let Some(rest) = tr_id.strip_prefix(&['T', 'J', 'C'][..]) {
            return format!("V{rest}");
        }
    }
    tr_id.to_string()
}

/// Makes an HTTP request after waiting on the rate limiter
///
/// Non-2xx answers are logged with their body and returned as
/// `AppError::Unexpected`. There is no retry.
///
/// # Example
///
/// ```ignore
/// let response = make_http_request(
///     &client,
///     &rate_limiter,
///     Method::GET,
///     "https://openapivts.koreainvestment.com:29443/uapi/overseas-price/v1/quotations/price",
///     vec![("tr_id", "HHDFS00000300")],
///     Payload::Query(&params),
/// ).await?;
/// ```
pub async fn make_http_request(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    payload: Payload<'_>,
) -> Result<Response, AppError> {
    rate_limiter.wait().await;

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);
    for (name, value) in &headers {
        request = request.header(*name, *value);
    }
    request = match payload {
        Payload::Query(params) => request.query(params),
        Payload::Json(body) => request.json(body),
    };

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Unexpected(status))
}
