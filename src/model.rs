//! Domain Types
//!
//! Lead records, the modal's form draft and the authentication payloads,
//! in the JSON shapes the lead backend speaks.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ============ Leads ============

/// Server-assigned lead identifier (`_id` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Lost,
}

impl LeadStatus {
    /// All statuses in the order the status picker lists them
    pub const ALL: [LeadStatus; 3] = [LeadStatus::New, LeadStatus::Contacted, LeadStatus::Lost];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Lost => "Lost",
        }
    }

    /// CSS classes for the status badge in the lead table
    pub fn badge_class(&self) -> &'static str {
        match self {
            LeadStatus::New => "bg-blue-100 text-blue-800",
            LeadStatus::Contacted => "bg-green-100 text-green-800",
            LeadStatus::Lost => "bg-red-100 text-red-800",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DraftError::UnknownStatus(s.to_string()))
    }
}

/// Status as a lead record carries it: one of the known statuses, or
/// whatever other label the backend stored
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordStatus {
    Known(LeadStatus),
    Unknown(String),
}

impl RecordStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RecordStatus::Known(status) => status.as_str(),
            RecordStatus::Unknown(label) => label,
        }
    }

    /// CSS classes for the badge; unknown labels get a neutral gray badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            RecordStatus::Known(status) => status.badge_class(),
            RecordStatus::Unknown(_) => "bg-gray-100 text-gray-800",
        }
    }

    pub fn known(&self) -> Option<LeadStatus> {
        match self {
            RecordStatus::Known(status) => Some(*status),
            RecordStatus::Unknown(_) => None,
        }
    }
}

impl From<String> for RecordStatus {
    fn from(label: String) -> Self {
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == label)
            .map(RecordStatus::Known)
            .unwrap_or(RecordStatus::Unknown(label))
    }
}

impl From<LeadStatus> for RecordStatus {
    fn from(status: LeadStatus) -> Self {
        RecordStatus::Known(status)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecordStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A sales contact record as returned by the backend.
///
/// Parsing is lenient: only an identifier is required. Missing or null text
/// fields read as empty, an unparseable `createdAt` reads as absent and an
/// unrecognised status is kept as [`RecordStatus::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLead")]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: RecordStatus,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Lead {
    /// Creation date as shown in the table's "Created" column
    pub fn created_label(&self) -> String {
        self.created_at
            .map(|dt| dt.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "—".to_string())
    }
}

/// Wire shape of a lead record before normalisation
#[derive(Deserialize)]
struct RawLead {
    #[serde(rename = "_id", default)]
    object_id: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    email: Option<Value>,
    #[serde(default)]
    phone: Option<Value>,
    #[serde(default)]
    status: Option<Value>,
    #[serde(rename = "createdAt", default)]
    created_at: Option<Value>,
}

impl TryFrom<RawLead> for Lead {
    type Error = String;

    fn try_from(raw: RawLead) -> Result<Self, Self::Error> {
        let id = record_id(raw.object_id, raw.id).ok_or("lead record has no _id")?;

        Ok(Lead {
            id: LeadId(id),
            name: text(raw.name).unwrap_or_default(),
            email: text(raw.email).unwrap_or_default(),
            phone: text(raw.phone).unwrap_or_default(),
            status: RecordStatus::from(text(raw.status).unwrap_or_default()),
            created_at: raw.created_at.as_ref().and_then(timestamp),
        })
    }
}

/// `_id` wins over the `id` virtual when a record carries both
fn record_id(object_id: Option<Value>, id: Option<Value>) -> Option<String> {
    text(object_id)
        .filter(|id| !id.is_empty())
        .or_else(|| text(id).filter(|id| !id.is_empty()))
}

/// Scalar JSON as text; null, arrays and objects read as absent
fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// RFC 3339, a bare `YYYY-MM-DD[THH:MM:SS]` taken as UTC, or epoch milliseconds
fn timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(Utc.from_utc_datetime(&naive));
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| Utc.from_utc_datetime(&naive))
        }
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

// ============ Form Draft ============

/// Edit buffer for the lead modal; also the create/update request body
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
}

impl LeadDraft {
    /// Draft pre-populated from an existing lead (edit flow). An unknown
    /// status starts the picker on the default.
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            name: lead.name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            status: lead.status.known().unwrap_or_default(),
        }
    }

    /// Field checks equivalent to the form's native input constraints
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::Missing("name"));
        }
        if self.email.trim().is_empty() {
            return Err(DraftError::Missing("email"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(DraftError::InvalidEmail(self.email.clone()));
        }
        if self.phone.trim().is_empty() {
            return Err(DraftError::Missing("phone"));
        }
        Ok(())
    }
}

/// `local@domain` with no whitespace, the same bar an `<input type="email">` sets
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Draft validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("unknown status '{0}' (expected New, Contacted or Lost)")]
    UnknownStatus(String),
}

// ============ Authentication ============

/// Login request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Authenticated user identity, as much of it as the server returns
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawUser")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Deserialize)]
struct RawUser {
    #[serde(rename = "_id", default)]
    object_id: Option<Value>,
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    email: Option<Value>,
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        User {
            id: record_id(raw.object_id, raw.id),
            name: text(raw.name),
            email: text(raw.email),
        }
    }
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Account")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> LeadDraft {
        LeadDraft {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "1".to_string(),
            status: LeadStatus::New,
        }
    }

    #[test]
    fn test_lead_from_backend_json() {
        let lead: Lead = serde_json::from_value(serde_json::json!({
            "_id": "65f0c1",
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "555-0100",
            "status": "Contacted",
            "createdAt": "2024-03-12T09:30:00.000Z",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(lead.id.as_str(), "65f0c1");
        assert_eq!(lead.status, RecordStatus::Known(LeadStatus::Contacted));
        assert_eq!(lead.created_label(), "Mar 12, 2024");
    }

    #[test]
    fn test_lead_keeps_unknown_status() {
        let lead: Lead = serde_json::from_value(serde_json::json!({
            "_id": "1", "name": "A", "email": "a@x.com", "phone": "1", "status": "Qualified"
        }))
        .unwrap();

        assert_eq!(lead.status, RecordStatus::Unknown("Qualified".to_string()));
        assert_eq!(lead.status.as_str(), "Qualified");
        assert_eq!(lead.status.badge_class(), "bg-gray-100 text-gray-800");
        assert_eq!(LeadDraft::from_lead(&lead).status, LeadStatus::New);
    }

    #[test]
    fn test_missing_timestamp_label() {
        let lead: Lead = serde_json::from_value(serde_json::json!({
            "id": "1", "name": "A", "email": "a@x.com", "status": "Lost"
        }))
        .unwrap();
        assert_eq!(lead.created_label(), "—");
        assert_eq!(lead.phone, "");
        assert_eq!(lead.status.known(), Some(LeadStatus::Lost));
    }

    #[test]
    fn test_lead_tolerates_odd_timestamps() {
        let parse = |created: serde_json::Value| -> Lead {
            serde_json::from_value(serde_json::json!({
                "_id": "1", "name": "A", "email": "a@x.com", "status": "New", "createdAt": created
            }))
            .unwrap()
        };

        assert_eq!(parse(serde_json::json!("2024-03-12")).created_label(), "Mar 12, 2024");
        assert_eq!(
            parse(serde_json::json!("2024-03-12T09:30:00")).created_label(),
            "Mar 12, 2024"
        );
        assert_eq!(parse(serde_json::json!(1710235800000i64)).created_label(), "Mar 12, 2024");
        assert_eq!(parse(serde_json::json!("last tuesday")).created_at, None);
        assert_eq!(parse(serde_json::json!({"$date": 1})).created_at, None);
    }

    #[test]
    fn test_lead_null_fields_read_as_empty() {
        let lead: Lead = serde_json::from_value(serde_json::json!({
            "_id": "1", "name": "A", "email": null, "phone": null, "status": null
        }))
        .unwrap();

        assert_eq!(lead.email, "");
        assert_eq!(lead.phone, "");
        assert_eq!(lead.status, RecordStatus::Unknown(String::new()));
    }

    #[test]
    fn test_lead_with_both_id_fields_prefers_object_id() {
        let lead: Lead = serde_json::from_value(serde_json::json!({
            "_id": "65f0c1", "id": "virtual", "name": "A", "email": "a@x.com", "status": "New"
        }))
        .unwrap();
        assert_eq!(lead.id.as_str(), "65f0c1");

        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["_id"], "65f0c1");
        assert_eq!(value["status"], "New");
    }

    #[test]
    fn test_lead_without_id_is_rejected() {
        let result: Result<Lead, _> = serde_json::from_value(serde_json::json!({"name": "A"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_badge_classes_are_distinct() {
        assert_eq!(LeadStatus::New.badge_class(), "bg-blue-100 text-blue-800");
        assert_ne!(LeadStatus::Contacted.badge_class(), LeadStatus::Lost.badge_class());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("contacted".parse::<LeadStatus>().unwrap(), LeadStatus::Contacted);
        assert!(matches!("won".parse::<LeadStatus>(), Err(DraftError::UnknownStatus(_))));
    }

    #[test]
    fn test_draft_wire_shape() {
        let value = serde_json::to_value(draft()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "A", "email": "a@x.com", "phone": "1", "status": "New"})
        );
    }

    #[test]
    fn test_blank_draft_defaults_to_new() {
        let blank = LeadDraft::default();
        assert_eq!(blank.status, LeadStatus::New);
        assert!(blank.name.is_empty());
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft().validate().is_ok());

        let mut d = draft();
        d.name = "  ".to_string();
        assert_eq!(d.validate(), Err(DraftError::Missing("name")));

        let mut d = draft();
        d.email = "not-an-email".to_string();
        assert!(matches!(d.validate(), Err(DraftError::InvalidEmail(_))));

        let mut d = draft();
        d.email = "a b@x.com".to_string();
        assert!(matches!(d.validate(), Err(DraftError::InvalidEmail(_))));

        let mut d = draft();
        d.phone.clear();
        assert_eq!(d.validate(), Err(DraftError::Missing("phone")));
    }

    #[test]
    fn test_user_display_name_fallbacks() {
        let user = User { name: Some("Grace".into()), ..Default::default() };
        assert_eq!(user.display_name(), "Grace");

        let user = User { email: Some("g@x.com".into()), ..Default::default() };
        assert_eq!(user.display_name(), "g@x.com");

        assert_eq!(User::default().display_name(), "Account");
    }

    #[test]
    fn test_user_with_both_id_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "_id": "u1", "id": "u1", "name": "Ada", "email": null
        }))
        .unwrap();

        assert_eq!(user.id.as_deref(), Some("u1"));
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.email, None);
    }
}
