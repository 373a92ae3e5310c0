/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Continuation flags and cursors of paged listings
pub mod cursor;
/// Exchange codes, order sides and revision actions
pub mod exchange;
/// HTTP client with authentication headers and rate limiting
pub mod http;
/// Request descriptors
pub mod requests;
/// Raw responses, the response envelope and token payloads
pub mod responses;
/// Result tables reshaped from response sections
pub mod table;
