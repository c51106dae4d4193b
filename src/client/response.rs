//! Response Classification
//!
//! Turns raw response bodies into discriminated outcomes. The backend signals
//! success by body shape, not by status code:
//!
//! - list: a JSON array of leads
//! - create/update: an object with a `lead` object
//! - login/register: an object with a non-empty `token` string
//!
//! Anything else is a rejection, optionally carrying the server's `message`.

use serde::Deserialize;
use serde_json::Value;

use crate::model::{Lead, User};
use crate::session::Session;

/// Outcome of a create or update call
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The body carried a `lead` object. `lead` is `None` if it had no
    /// identifier.
    Saved { lead: Option<Lead> },
    /// No `lead` object; the server message if one was sent
    Rejected { message: Option<String> },
}

/// Outcome of a login or register call
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Established(Session),
    Rejected { message: Option<String> },
}

/// The lead list, if the body is an array. Records without an identifier
/// cannot be edited or deleted and are left out.
pub fn classify_list(body: &Value) -> Option<Vec<Lead>> {
    let items = body.as_array()?;
    let leads = items
        .iter()
        .filter_map(|item| match Lead::deserialize(item) {
            Ok(lead) => Some(lead),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unusable lead record");
                None
            }
        })
        .collect();
    Some(leads)
}

pub fn classify_save(body: &Value) -> SaveOutcome {
    match body.get("lead") {
        Some(lead) if lead.is_object() => SaveOutcome::Saved {
            lead: serde_json::from_value(lead.clone()).ok(),
        },
        _ => SaveOutcome::Rejected {
            message: server_message(body),
        },
    }
}

pub fn classify_session(body: &Value) -> SessionOutcome {
    let token = body
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty());

    match token {
        Some(token) => {
            let user = body
                .get("user")
                .and_then(|u| serde_json::from_value::<User>(u.clone()).ok());
            SessionOutcome::Established(Session {
                token: token.to_string(),
                user,
            })
        }
        None => SessionOutcome::Rejected {
            message: server_message(body),
        },
    }
}

/// The server's `message` field, if present and non-empty
pub fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}
