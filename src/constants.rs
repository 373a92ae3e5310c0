/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

/// User agent string sent with every request unless `KIS_USER_AGENT` overrides it
pub const USER_AGENT: &str = "kis-overseas-client/0.1.0";
/// Default base URL of the live trading environment
pub const DEFAULT_PROD_URL: &str = "https://openapi.koreainvestment.com:9443";
/// Default base URL of the simulated (paper) trading environment
pub const DEFAULT_VPS_URL: &str = "https://openapivts.koreainvestment.com:29443";
/// Default HTTP timeout in seconds (10 minutes)
pub const DEFAULT_REST_TIMEOUT: u64 = 600;
/// Delay in milliseconds between two pages of the same listing
pub const DEFAULT_PAGE_DELAY_MS: u64 = 100;
/// Customer type sent in the `custtype` header, `P` for individual accounts
pub const DEFAULT_CUSTTYPE: &str = "P";
/// Default account product code (the last two digits of the account number)
pub const DEFAULT_PRODUCT_CODE: &str = "01";
/// Seconds after which an issued access token is re-issued, whatever its expiry says
pub const TOKEN_REFRESH_SECONDS: i64 = 86_400;
/// Format of `access_token_token_expired` in the token response
pub const TOKEN_EXPIRY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Prefix of the per-day credential cache file name
pub const TOKEN_CACHE_PREFIX: &str = "KIS";
/// Message fragment the server puts in `msg1` when a query matched nothing
pub const NO_DATA_MESSAGE: &str = "조회할 자료가 없습니다";
/// Return code of a successful call
pub const SUCCESS_CODE: &str = "0";
/// Path of the token issuance endpoint
pub const TOKEN_PATH: &str = "/oauth2/tokenP";
/// Path of the hashkey endpoint
pub const HASHKEY_PATH: &str = "/uapi/hashkey";
/// Requests per second allowed in live mode
pub const LIVE_MAX_REQUESTS_PER_SECOND: u32 = 20;
/// Requests per second allowed in paper mode
pub const PAPER_MAX_REQUESTS_PER_SECOND: u32 = 2;
