//! Endpoint Table
//!
//! Method, path and auth requirement for each backend operation, shared by
//! every transport.

use std::fmt;

use crate::model::LeadId;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://lead-be-i3xm.onrender.com/api";

/// HTTP methods used by the lead backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// A backend operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Register,
    Login,
    ListLeads,
    CreateLead,
    UpdateLead(&'a LeadId),
    DeleteLead(&'a LeadId),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Register | Endpoint::Login | Endpoint::CreateLead => Method::Post,
            Endpoint::ListLeads => Method::Get,
            Endpoint::UpdateLead(_) => Method::Put,
            Endpoint::DeleteLead(_) => Method::Delete,
        }
    }

    /// Path relative to the API base
    pub fn path(&self) -> String {
        match self {
            Endpoint::Register => "/auth/register".to_string(),
            Endpoint::Login => "/auth/login".to_string(),
            Endpoint::ListLeads | Endpoint::CreateLead => "/leads".to_string(),
            Endpoint::UpdateLead(id) | Endpoint::DeleteLead(id) => {
                format!("/leads/{}", urlencoding::encode(id.as_str()))
            }
        }
    }

    /// Whether the operation carries the session token
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Register | Endpoint::Login)
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", normalize_base(base), self.path())
    }

    /// `Authorization` header value, present only when the operation is
    /// authenticated and a token is held
    pub fn authorization(&self, token: Option<&str>) -> Option<String> {
        if !self.requires_auth() {
            return None;
        }
        token.map(bearer)
    }
}

/// `Bearer <token>`
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Remove trailing slashes from a base URL
pub fn normalize_base(base: &str) -> &str {
    base.trim_end_matches('/')
}
