//! Lead Dashboard Controller
//!
//! State for the single lead-management screen: the list, the create/edit
//! modal and the status banners. [`Dashboard`] is a plain state type; every
//! `apply_*` method folds one API result into it and returns a [`Step`]
//! naming the follow-up work (banner timers to schedule, whether to refetch).
//! Hosts that can hold `&mut Dashboard` across an await use the drivers
//! [`Dashboard::refresh`], [`Dashboard::submit`] and [`Dashboard::delete`].
//!
//! Mutations are always followed by a full refetch. Nothing is deduplicated:
//! the last list applied wins.

mod banner;

pub use banner::{Banner, BannerId, BannerKind, Banners, DismissTicket, BANNER_TIMEOUT};

use serde_json::Value;

use crate::client::response::{classify_list, classify_save, SaveOutcome};
use crate::client::{ApiResult, LeadApi};
use crate::model::{Lead, LeadDraft, LeadId};

// ============ Messages ============

pub const LEAD_CREATED: &str = "Lead created successfully!";
pub const LEAD_UPDATED: &str = "Lead updated successfully!";
pub const LEAD_DELETED: &str = "Lead deleted successfully!";
pub const CREATE_FAILED: &str = "Failed to create lead";
pub const UPDATE_FAILED: &str = "Failed to update lead";
pub const SAVE_NETWORK_ERROR: &str = "Network error. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete lead";
pub const FETCH_FAILED: &str = "Failed to fetch leads";

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this lead?";
pub const EMPTY_PLACEHOLDER: &str = "No leads yet. Click \"Add Lead\" to create your first lead.";

// ============ Modal ============

#[derive(Debug, Clone, PartialEq)]
pub enum ModalMode {
    Create,
    /// Editing the lead the modal was opened from
    Edit(Lead),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadModal {
    pub mode: ModalMode,
    pub draft: LeadDraft,
}

impl LeadModal {
    pub fn title(&self) -> &'static str {
        match self.mode {
            ModalMode::Create => "Add New Lead",
            ModalMode::Edit(_) => "Edit Lead",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            ModalMode::Create => "Create",
            ModalMode::Edit(_) => "Update",
        }
    }

    pub fn target_id(&self) -> Option<&LeadId> {
        match &self.mode {
            ModalMode::Create => None,
            ModalMode::Edit(lead) => Some(&lead.id),
        }
    }
}

// ============ Steps ============

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Displayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    Create,
    Update,
}

/// A create or update ready to send
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(LeadDraft),
    Update(LeadId, LeadDraft),
}

impl Submission {
    pub fn kind(&self) -> SaveKind {
        match self {
            Submission::Create(_) => SaveKind::Create,
            Submission::Update(..) => SaveKind::Update,
        }
    }
}

/// Follow-up work after a state transition
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct Step {
    /// Banner dismissals the host must schedule
    pub tickets: Vec<DismissTicket>,
    /// Whether the list must be fetched again
    pub refetch: bool,
}

impl Step {
    fn banner(ticket: DismissTicket) -> Self {
        Self {
            tickets: vec![ticket],
            refetch: false,
        }
    }

    fn and_refetch(mut self) -> Self {
        self.refetch = true;
        self
    }
}

// ============ Dashboard ============

#[derive(Debug, Clone)]
pub struct Dashboard {
    leads: Vec<Lead>,
    phase: ListPhase,
    modal: Option<LeadModal>,
    banners: Banners,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// A freshly mounted dashboard: empty list, loading
    pub fn new() -> Self {
        Self {
            leads: Vec::new(),
            phase: ListPhase::Loading,
            modal: None,
            banners: Banners::new(),
        }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn count(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn heading(&self) -> String {
        format!("All Leads ({})", self.leads.len())
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn modal(&self) -> Option<&LeadModal> {
        self.modal.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut LeadDraft> {
        self.modal.as_mut().map(|m| &mut m.draft)
    }

    pub fn banners(&self) -> &Banners {
        &self.banners
    }

    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        self.banners.dismiss(ticket)
    }

    // ---------- list ----------

    pub fn begin_fetch(&mut self) {
        self.phase = ListPhase::Loading;
    }

    /// Replace the list with an array response. Anything else keeps the
    /// current list and raises the fetch error banner.
    pub fn apply_list(&mut self, result: ApiResult<Value>) -> Step {
        self.phase = ListPhase::Displayed;

        let leads = match &result {
            Ok(body) => classify_list(body),
            Err(e) => {
                tracing::warn!(error = %e, "Lead list request failed");
                None
            }
        };

        match leads {
            Some(leads) => {
                tracing::debug!(count = leads.len(), "Lead list loaded");
                self.leads = leads;
                Step::default()
            }
            None => Step::banner(self.banners.error(FETCH_FAILED)),
        }
    }

    // ---------- modal ----------

    pub fn open_create(&mut self) {
        self.modal = Some(LeadModal {
            mode: ModalMode::Create,
            draft: LeadDraft::default(),
        });
    }

    pub fn open_edit(&mut self, lead: &Lead) {
        self.modal = Some(LeadModal {
            mode: ModalMode::Edit(lead.clone()),
            draft: LeadDraft::from_lead(lead),
        });
    }

    /// Open the editor for a listed lead. Returns false if the id is not listed.
    pub fn open_edit_by_id(&mut self, id: &LeadId) -> bool {
        match self.leads.iter().find(|lead| &lead.id == id).cloned() {
            Some(lead) => {
                self.open_edit(&lead);
                true
            }
            None => false,
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// The request the open modal would send
    pub fn submission(&self) -> Option<Submission> {
        let modal = self.modal.as_ref()?;
        Some(match &modal.mode {
            ModalMode::Create => Submission::Create(modal.draft.clone()),
            ModalMode::Edit(lead) => Submission::Update(lead.id.clone(), modal.draft.clone()),
        })
    }

    // ---------- mutations ----------

    /// Fold a create or update response. Success closes the modal and asks
    /// for a refetch; a rejection keeps the modal open.
    pub fn apply_save(&mut self, kind: SaveKind, result: ApiResult<Value>) -> Step {
        let (saved, failed) = match kind {
            SaveKind::Create => (LEAD_CREATED, CREATE_FAILED),
            SaveKind::Update => (LEAD_UPDATED, UPDATE_FAILED),
        };

        match result.as_ref().map(classify_save) {
            Ok(SaveOutcome::Saved { .. }) => {
                self.modal = None;
                Step::banner(self.banners.success(saved)).and_refetch()
            }
            Ok(SaveOutcome::Rejected { message }) => {
                tracing::warn!(?kind, message = ?message, "Lead save rejected");
                Step::banner(self.banners.error(message.unwrap_or_else(|| failed.to_string())))
            }
            Err(e) => {
                tracing::warn!(?kind, error = %e, "Lead save request failed");
                Step::banner(self.banners.error(SAVE_NETWORK_ERROR))
            }
        }
    }

    /// Fold a delete response. The body is not inspected: any response counts.
    pub fn apply_delete(&mut self, result: ApiResult<Value>) -> Step {
        match result {
            Ok(_) => Step::banner(self.banners.success(LEAD_DELETED)).and_refetch(),
            Err(e) => {
                tracing::warn!(error = %e, "Lead delete request failed");
                Step::banner(self.banners.error(DELETE_FAILED))
            }
        }
    }

    // ---------- drivers ----------

    /// Fetch and apply the lead list
    pub async fn refresh<A: LeadApi + ?Sized>(
        &mut self,
        api: &A,
        token: Option<&str>,
    ) -> Vec<DismissTicket> {
        self.begin_fetch();
        let result = api.list_leads(token).await;
        self.apply_list(result).tickets
    }

    /// Send the open modal's draft, refetching on success. No-op without a modal.
    pub async fn submit<A: LeadApi + ?Sized>(
        &mut self,
        api: &A,
        token: Option<&str>,
    ) -> Vec<DismissTicket> {
        let Some(submission) = self.submission() else {
            return Vec::new();
        };

        let result = match &submission {
            Submission::Create(draft) => api.create_lead(token, draft).await,
            Submission::Update(id, draft) => api.update_lead(token, id, draft).await,
        };

        let step = self.apply_save(submission.kind(), result);
        self.follow(step, api, token).await
    }

    /// Delete a lead. An unconfirmed delete sends nothing and shows nothing.
    pub async fn delete<A: LeadApi + ?Sized>(
        &mut self,
        api: &A,
        token: Option<&str>,
        id: &LeadId,
        confirmed: bool,
    ) -> Vec<DismissTicket> {
        if !confirmed {
            return Vec::new();
        }

        let result = api.delete_lead(token, id).await;
        let step = self.apply_delete(result);
        self.follow(step, api, token).await
    }

    async fn follow<A: LeadApi + ?Sized>(
        &mut self,
        step: Step,
        api: &A,
        token: Option<&str>,
    ) -> Vec<DismissTicket> {
        let mut tickets = step.tickets;
        if step.refetch {
            tickets.extend(self.refresh(api, token).await);
        }
        tickets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthContext;
    use crate::client::fake::{Call, FakeApi, CREATE, DELETE, LIST, LOGIN, UPDATE};
    use crate::client::ApiError;
    use crate::model::{Credentials, LeadStatus};
    use crate::session::{MemoryStore, SessionStore};
    use serde_json::json;

    fn lead_json(id: &str, name: &str) -> Value {
        json!({
            "_id": id,
            "name": name,
            "email": format!("{}@x.com", name.to_lowercase()),
            "phone": "1",
            "status": "New",
            "createdAt": "2024-01-05T10:00:00Z"
        })
    }

    fn draft() -> LeadDraft {
        LeadDraft {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "1".to_string(),
            status: LeadStatus::New,
        }
    }

    async fn loaded(api: &FakeApi, leads: Value) -> Dashboard {
        api.push(LIST, Ok(leads));
        let mut dashboard = Dashboard::new();
        let tickets = dashboard.refresh(api, Some("t")).await;
        assert!(tickets.is_empty());
        dashboard
    }

    #[test]
    fn test_new_dashboard_is_loading() {
        let dashboard = Dashboard::new();
        assert_eq!(dashboard.phase(), ListPhase::Loading);
        assert_eq!(dashboard.heading(), "All Leads (0)");
        assert!(dashboard.modal().is_none());
    }

    #[tokio::test]
    async fn test_list_count_matches_response() {
        let api = FakeApi::new();
        let dashboard = loaded(&api, json!([lead_json("1", "A"), lead_json("2", "B")])).await;

        assert_eq!(dashboard.phase(), ListPhase::Displayed);
        assert_eq!(dashboard.count(), 2);
        assert_eq!(dashboard.heading(), "All Leads (2)");
        assert_eq!(api.calls(), vec![Call::List(Some("t".to_string()))]);
    }

    #[tokio::test]
    async fn test_list_bad_shape_keeps_list_and_raises_banner() {
        let api = FakeApi::new();
        let mut dashboard = loaded(&api, json!([lead_json("1", "A")])).await;

        api.push(LIST, Ok(json!({"message": "Not authorized, token failed"})));
        let tickets = dashboard.refresh(&api, Some("t")).await;

        assert_eq!(tickets.len(), 1);
        assert_eq!(dashboard.count(), 1);
        assert_eq!(dashboard.banners().error_message(), Some(FETCH_FAILED));
    }

    #[tokio::test]
    async fn test_odd_records_still_replace_list() {
        let api = FakeApi::new();
        let mut dashboard = loaded(&api, json!([lead_json("1", "A")])).await;

        let mut qualified = lead_json("2", "B");
        qualified["status"] = json!("Qualified");
        let mut dated = lead_json("3", "C");
        dated["createdAt"] = json!("2024-03-12");
        api.push(LIST, Ok(json!([lead_json("1", "A"), qualified, dated])));
        let tickets = dashboard.refresh(&api, Some("t")).await;

        assert!(tickets.is_empty());
        assert_eq!(dashboard.count(), 3);
        assert!(dashboard.banners().is_empty());
        assert_eq!(dashboard.leads()[1].status.as_str(), "Qualified");
        assert_eq!(dashboard.leads()[2].created_label(), "Mar 12, 2024");
    }

    #[test]
    fn test_list_transport_failure() {
        let mut dashboard = Dashboard::new();
        let step = dashboard.apply_list(Err(ApiError::Network("offline".into())));

        assert!(!step.refetch);
        assert_eq!(step.tickets[0].kind, BannerKind::Error);
        assert_eq!(dashboard.phase(), ListPhase::Displayed);
        assert!(dashboard.is_empty());
    }

    #[test]
    fn test_modal_labels() {
        let mut dashboard = Dashboard::new();

        dashboard.open_create();
        let modal = dashboard.modal().unwrap();
        assert_eq!(modal.title(), "Add New Lead");
        assert_eq!(modal.submit_label(), "Create");
        assert_eq!(modal.draft, LeadDraft::default());
        assert_eq!(modal.target_id(), None);

        let lead: Lead = serde_json::from_value(lead_json("7", "Grace")).unwrap();
        dashboard.open_edit(&lead);
        let modal = dashboard.modal().unwrap();
        assert_eq!(modal.title(), "Edit Lead");
        assert_eq!(modal.submit_label(), "Update");
        assert_eq!(modal.draft.name, "Grace");
        assert_eq!(modal.target_id(), Some(&LeadId::new("7")));
    }

    #[tokio::test]
    async fn test_open_edit_by_id() {
        let api = FakeApi::new();
        let mut dashboard = loaded(&api, json!([lead_json("1", "A")])).await;

        assert!(!dashboard.open_edit_by_id(&LeadId::new("missing")));
        assert!(dashboard.modal().is_none());

        assert!(dashboard.open_edit_by_id(&LeadId::new("1")));
        assert_eq!(dashboard.modal().unwrap().draft.name, "A");
    }

    #[tokio::test]
    async fn test_create_success_closes_modal_and_refetches() {
        let api = FakeApi::new()
            .reply(CREATE, Ok(json!({"message": "Lead created", "lead": lead_json("1", "A")})))
            .reply(LIST, Ok(json!([lead_json("1", "A")])));
        let mut dashboard = Dashboard::new();

        dashboard.open_create();
        *dashboard.draft_mut().unwrap() = draft();
        let tickets = dashboard.submit(&api, Some("t")).await;

        assert!(dashboard.modal().is_none());
        assert_eq!(dashboard.count(), 1);
        assert_eq!(dashboard.banners().success_message(), Some(LEAD_CREATED));
        assert_eq!(tickets.len(), 1);
        assert_eq!(
            api.calls(),
            vec![
                Call::Create(Some("t".to_string()), draft()),
                Call::List(Some("t".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_rejected_keeps_modal_open() {
        let api = FakeApi::new()
            .reply(CREATE, Ok(json!({"message": "Lead with this email already exists"})))
            .reply(CREATE, Ok(json!({})));
        let mut dashboard = Dashboard::new();
        dashboard.open_create();

        let _ = dashboard.submit(&api, Some("t")).await;
        assert!(dashboard.modal().is_some());
        assert_eq!(
            dashboard.banners().error_message(),
            Some("Lead with this email already exists")
        );

        let _ = dashboard.submit(&api, Some("t")).await;
        assert!(dashboard.modal().is_some());
        assert_eq!(dashboard.banners().error_message(), Some(CREATE_FAILED));

        // no refetch after a rejection
        assert!(api.calls().iter().all(|c| matches!(c, Call::Create(..))));
    }

    #[tokio::test]
    async fn test_update_sends_target_id() {
        let api = FakeApi::new();
        let mut dashboard = loaded(&api, json!([lead_json("1", "A")])).await;

        api.push(UPDATE, Ok(json!({"lead": lead_json("1", "Alice")})));
        api.push(LIST, Ok(json!([lead_json("1", "Alice")])));

        assert!(dashboard.open_edit_by_id(&LeadId::new("1")));
        dashboard.draft_mut().unwrap().name = "Alice".to_string();
        let _ = dashboard.submit(&api, Some("t")).await;

        assert!(dashboard.modal().is_none());
        assert_eq!(dashboard.leads()[0].name, "Alice");
        assert_eq!(dashboard.banners().success_message(), Some(LEAD_UPDATED));
        assert!(matches!(
            &api.calls()[1],
            Call::Update(Some(_), id, d) if id.as_str() == "1" && d.name == "Alice"
        ));
    }

    #[test]
    fn test_update_rejected_fallback_and_network_error() {
        let mut dashboard = Dashboard::new();
        let lead: Lead = serde_json::from_value(lead_json("1", "A")).unwrap();
        dashboard.open_edit(&lead);

        let step = dashboard.apply_save(SaveKind::Update, Ok(json!({"lead": null})));
        assert!(!step.refetch);
        assert_eq!(dashboard.banners().error_message(), Some(UPDATE_FAILED));

        let _ = dashboard.apply_save(SaveKind::Update, Err(ApiError::Network("reset".into())));
        assert_eq!(dashboard.banners().error_message(), Some(SAVE_NETWORK_ERROR));
        assert!(dashboard.modal().is_some());
    }

    #[tokio::test]
    async fn test_declined_delete_is_noop() {
        let api = FakeApi::new();
        let mut dashboard = loaded(&api, json!([lead_json("1", "A")])).await;

        let tickets = dashboard.delete(&api, Some("t"), &LeadId::new("1"), false).await;

        assert!(tickets.is_empty());
        assert_eq!(dashboard.count(), 1);
        assert!(dashboard.banners().is_empty());
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_ignores_body() {
        let api = FakeApi::new();
        let mut dashboard = loaded(&api, json!([lead_json("1", "A")])).await;

        api.push(DELETE, Ok(json!({"message": "Lead not found"})));
        api.push(LIST, Ok(json!([])));
        let _ = dashboard.delete(&api, Some("t"), &LeadId::new("1"), true).await;

        assert_eq!(dashboard.banners().success_message(), Some(LEAD_DELETED));
        assert!(dashboard.is_empty());
    }

    #[tokio::test]
    async fn test_delete_transport_failure() {
        let api = FakeApi::new();
        let mut dashboard = loaded(&api, json!([lead_json("1", "A")])).await;

        api.push(DELETE, Err(ApiError::Network("offline".into())));
        let _ = dashboard.delete(&api, Some("t"), &LeadId::new("1"), true).await;

        assert_eq!(dashboard.banners().error_message(), Some(DELETE_FAILED));
        assert_eq!(dashboard.count(), 1);
        // no refetch after a failed delete
        assert_eq!(api.calls().len(), 2);
    }

    #[test]
    fn test_replaced_banner_survives_old_ticket() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.apply_list(Err(ApiError::Network("a".into())));
        let second = dashboard.apply_delete(Err(ApiError::Network("b".into())));

        assert!(!dashboard.dismiss(first.tickets[0]));
        assert_eq!(dashboard.banners().error_message(), Some(DELETE_FAILED));

        assert!(dashboard.dismiss(second.tickets[0]));
        assert!(dashboard.banners().is_empty());
        assert_eq!(second.tickets[0].after, BANNER_TIMEOUT);
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_clears_after_its_timeout() {
        let mut dashboard = Dashboard::new();
        let started = tokio::time::Instant::now();

        let step = dashboard.apply_list(Err(ApiError::Network("offline".into())));
        let ticket = step.tickets[0];

        tokio::time::sleep(ticket.after - std::time::Duration::from_millis(1)).await;
        assert_eq!(dashboard.banners().error_message(), Some(FETCH_FAILED));

        tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        assert!(dashboard.dismiss(ticket));
        assert!(dashboard.banners().is_empty());
        assert!(started.elapsed() >= BANNER_TIMEOUT);
    }

    #[tokio::test]
    async fn test_login_then_empty_list_shows_placeholder() {
        let api = FakeApi::new()
            .reply(LOGIN, Ok(json!({"token": "jwt", "user": {"name": "Ada"}})))
            .reply(LIST, Ok(json!([])));
        let store = MemoryStore::new();
        let mut auth = AuthContext::restore(store.clone());

        let credentials = Credentials {
            email: "ada@x.com".to_string(),
            password: "pw".to_string(),
        };
        auth.login(&api, &credentials).await.unwrap();
        assert_eq!(store.load().unwrap().unwrap().token, "jwt");

        let mut dashboard = Dashboard::new();
        let _ = dashboard.refresh(&api, auth.token()).await;

        assert!(dashboard.is_empty());
        assert_eq!(dashboard.count(), 0);
        assert_eq!(dashboard.phase(), ListPhase::Displayed);
        assert!(EMPTY_PLACEHOLDER.starts_with("No leads yet"));
        assert_eq!(api.calls()[1], Call::List(Some("jwt".to_string())));
    }

    #[tokio::test]
    async fn test_create_then_list_shows_new_badge() {
        let api = FakeApi::new();
        let mut dashboard = loaded(&api, json!([])).await;

        let created = json!({"name": "A", "email": "a@x.com", "phone": "1", "status": "New", "_id": "1"});
        api.push(CREATE, Ok(json!({"lead": created.clone()})));
        api.push(LIST, Ok(json!([created])));

        dashboard.open_create();
        *dashboard.draft_mut().unwrap() = draft();
        let tickets = dashboard.submit(&api, Some("t")).await;

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].kind, BannerKind::Success);
        assert!(dashboard.modal().is_none());
        assert_eq!(dashboard.count(), 1);
        assert_eq!(dashboard.leads()[0].status.badge_class(), "bg-blue-100 text-blue-800");
    }
}
