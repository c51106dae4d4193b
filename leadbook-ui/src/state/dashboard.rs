//! Dashboard State
//!
//! Reactive wrapper around the dashboard controller. Requests run on
//! `spawn_local`; their results are folded in with the controller's `apply_*`
//! methods. Each banner slot owns one pending dismissal timer; a new banner
//! drops (and so cancels) the previous timer for its slot.

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use leptos::*;

use leadbook::dashboard::{Dashboard, Step, DELETE_CONFIRMATION};
use leadbook::{BannerKind, DismissTicket, LeadApi, LeadId};

use crate::api::GlooLeadApi;
use crate::state::auth::AuthState;

#[derive(Clone, Copy)]
pub struct DashboardState {
    pub dashboard: RwSignal<Dashboard>,
    timers: StoredValue<HashMap<BannerKind, Timeout>>,
    auth: AuthState,
}

impl DashboardState {
    pub fn new(auth: AuthState) -> Self {
        Self {
            dashboard: create_rw_signal(Dashboard::new()),
            timers: store_value(HashMap::new()),
            auth,
        }
    }

    /// Fetch the lead list
    pub fn refresh(&self) {
        let state = *self;
        let token = self.auth.token();
        self.dashboard.update(Dashboard::begin_fetch);

        spawn_local(async move {
            let api = GlooLeadApi::from_storage();
            let result = api.list_leads(token.as_deref()).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch leads: {}", e).into());
            }

            if let Some(step) = state.dashboard.try_update(|d| d.apply_list(result)) {
                state.follow(step);
            }
        });
    }

    pub fn open_create(&self) {
        self.dashboard.update(Dashboard::open_create);
    }

    pub fn open_edit(&self, id: LeadId) {
        self.dashboard.update(|d| {
            d.open_edit_by_id(&id);
        });
    }

    pub fn close_modal(&self) {
        self.dashboard.update(Dashboard::close_modal);
    }

    /// Send the open modal's draft
    pub fn submit(&self) {
        let Some(submission) = self.dashboard.with_untracked(Dashboard::submission) else {
            return;
        };
        let state = *self;
        let token = self.auth.token();

        spawn_local(async move {
            let api = GlooLeadApi::from_storage();
            let kind = submission.kind();
            let result = match &submission {
                leadbook::Submission::Create(draft) => api.create_lead(token.as_deref(), draft).await,
                leadbook::Submission::Update(id, draft) => {
                    api.update_lead(token.as_deref(), id, draft).await
                }
            };

            if let Some(step) = state.dashboard.try_update(|d| d.apply_save(kind, result)) {
                state.follow(step);
            }
        });
    }

    /// Ask for confirmation, then delete
    pub fn delete(&self, id: LeadId) {
        let confirmed = window()
            .confirm_with_message(DELETE_CONFIRMATION)
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let state = *self;
        let token = self.auth.token();

        spawn_local(async move {
            let api = GlooLeadApi::from_storage();
            let result = api.delete_lead(token.as_deref(), &id).await;

            if let Some(step) = state.dashboard.try_update(|d| d.apply_delete(result)) {
                state.follow(step);
            }
        });
    }

    fn follow(&self, step: Step) {
        self.schedule(step.tickets);
        if step.refetch {
            self.refresh();
        }
    }

    fn schedule(&self, tickets: Vec<DismissTicket>) {
        let dashboard = self.dashboard;

        for ticket in tickets {
            let timeout = Timeout::new(ticket.after.as_millis() as u32, move || {
                dashboard.update(|d| {
                    d.dismiss(ticket);
                });
            });

            // Replacing the entry drops the previous timer, which cancels it
            self.timers.update_value(|timers| {
                timers.insert(ticket.kind, timeout);
            });
        }
    }
}
