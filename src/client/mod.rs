//! Lead API Client
//!
//! Transport contract for the lead backend.
//!
//! # Endpoints
//!
//! - `POST /auth/register` - Create an account, returns `{token, user}`
//! - `POST /auth/login` - Authenticate, returns `{token, user}`
//! - `GET /leads` - List leads (bearer token)
//! - `POST /leads` - Create a lead, returns `{lead}` (bearer token)
//! - `PUT /leads/:id` - Update a lead, returns `{lead}` (bearer token)
//! - `DELETE /leads/:id` - Delete a lead (bearer token)
//!
//! Every operation resolves to the parsed response body whatever the HTTP
//! status was. Callers decide success from the body shape, see [`response`].

mod endpoint;
pub mod response;

#[cfg(not(target_arch = "wasm32"))]
mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use endpoint::{bearer, normalize_base, Endpoint, Method, DEFAULT_API_BASE};

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpLeadApi;

use async_trait::async_trait;
use serde_json::Value;

use crate::model::{Credentials, LeadDraft, LeadId, Registration};

/// Transport errors. A response that arrived with a JSON body is never an error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not JSON
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The request body could not be built
    #[error("Request build error: {0}")]
    Request(String),
}

/// Result type for transport operations
pub type ApiResult<T> = Result<T, ApiError>;

/// One async operation per backend capability.
///
/// `?Send` so the browser transport, whose futures are tied to the JS event
/// loop, can implement it alongside the native one.
#[async_trait(?Send)]
pub trait LeadApi {
    async fn register(&self, registration: &Registration) -> ApiResult<Value>;

    async fn login(&self, credentials: &Credentials) -> ApiResult<Value>;

    async fn list_leads(&self, token: Option<&str>) -> ApiResult<Value>;

    async fn create_lead(&self, token: Option<&str>, draft: &LeadDraft) -> ApiResult<Value>;

    async fn update_lead(
        &self,
        token: Option<&str>,
        id: &LeadId,
        draft: &LeadDraft,
    ) -> ApiResult<Value>;

    async fn delete_lead(&self, token: Option<&str>, id: &LeadId) -> ApiResult<Value>;
}

/// Parse a response body. An empty body reads as `null`.
pub fn decode_body(text: &str) -> ApiResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Serialize a request body
pub fn encode_body<T: serde::Serialize>(body: &T) -> ApiResult<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_body_is_null() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
        assert_eq!(decode_body("  \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_json_body() {
        let value = decode_body(r#"{"message":"Lead deleted"}"#).unwrap();
        assert_eq!(value["message"], "Lead deleted");
    }

    #[test]
    fn test_decode_html_body_fails() {
        let err = decode_body("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
