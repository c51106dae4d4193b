//! Native HTTP Transport
//!
//! [`LeadApi`] over reqwest.

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client};
use serde_json::Value;

use super::{decode_body, encode_body, ApiError, ApiResult, Endpoint, LeadApi, Method};
use crate::model::{Credentials, LeadDraft, LeadId, Registration};

/// Lead backend client over reqwest
#[derive(Debug, Clone)]
pub struct HttpLeadApi {
    client: Client,
    base_url: String,
}

impl HttpLeadApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured reqwest client (proxies, TLS roots)
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: super::normalize_base(&base_url).to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        endpoint: Endpoint<'_>,
        token: Option<&str>,
        body: Option<Value>,
    ) -> ApiResult<Value> {
        let url = endpoint.url(&self.base_url);
        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut request = self.client.request(method, &url);
        if let Some(header) = endpoint.authorization(token) {
            request = request.header(AUTHORIZATION, header);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        tracing::debug!(method = %endpoint.method(), url = %url, "Sending request");

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), bytes = text.len(), "Response received");

        decode_body(&text)
    }
}

#[async_trait(?Send)]
impl LeadApi for HttpLeadApi {
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
