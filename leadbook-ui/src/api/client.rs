//! HTTP API Client
//!
//! [`LeadApi`] over gloo-net for the browser.

use async_trait::async_trait;
use gloo_net::http::Request;
use leadbook::client::{decode_body, encode_body, normalize_base, Endpoint, Method};
use leadbook::{ApiError, ApiResult, Credentials, LeadApi, LeadDraft, LeadId, Registration};
use serde_json::Value;

use leadbook::DEFAULT_API_BASE;

const API_URL_KEY: &str = "leadbook_api_url";

/// API base URL from the `leadbook_api_url` local storage key, or the default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    normalize_base(&url).to_string()
}

/// Lead backend client over the browser's fetch
#[derive(Debug, Clone)]
pub struct GlooLeadApi {
    base_url: String,
}

impl GlooLeadApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url).to_string(),
        }
    }

    /// Client for the configured backend
    pub fn from_storage() -> Self {
        Self::new(&get_api_base())
    }

    async fn send(
        &self,
        endpoint: Endpoint<'_>,
        token: Option<&str>,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        let url = endpoint.url(&self.base_url);
        let mut builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        if let Some(header) = endpoint.authorization(token) {
            builder = builder.header("Authorization", &header);
        }

        let request = match body {
            Some(body) => builder
                .json(&body)
                .map_err(|e| ApiError::Request(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Request(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_body(&text)
    }
}

#[async_trait(?Send)]
impl LeadApi for GlooLeadApi {
    async fn register(&self, registration: &Registration) -> ApiResult<Value> {
        self.send(Endpoint::Register, None, Some(encode_body(registration)?))
            .await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<Value> {
        self.send(Endpoint::Login, None, Some(encode_body(credentials)?))
            .await
    }

    async fn list_leads(&self, token: Option<&str>) -> ApiResult<Value> {
        self.send(Endpoint::ListLeads, token, None).await
    }

    async fn create_lead(&self, token: Option<&str>, draft: &LeadDraft) -> ApiResult<Value> {
        self.send(Endpoint::CreateLead, token, Some(encode_body(draft)?))
            .await
    }

    async fn update_lead(
        &self,
        token: Option<&str>,
        id: &LeadId,
        draft: &LeadDraft,
    ) -> ApiResult<Value> {
        self.send(Endpoint::UpdateLead(id), token, Some(encode_body(draft)?))
            .await
    }

    async fn delete_lead(&self, token: Option<&str>, id: &LeadId) -> ApiResult<Value> {
        self.send(Endpoint::DeleteLead(id), token, None).await
    }
}
