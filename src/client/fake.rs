//! Scripted in-memory [`LeadApi`] for controller and auth tests.

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use super::{ApiError, ApiResult, LeadApi};
use crate::model::{Credentials, LeadDraft, LeadId, Registration};

/// Operation names used to script replies
pub(crate) const REGISTER: &str = "register";
pub(crate) const LOGIN: &str = "login";
pub(crate) const LIST: &str = "list";
pub(crate) const CREATE: &str = "create";
pub(crate) const UPDATE: &str = "update";
pub(crate) const DELETE: &str = "delete";

/// A call the fake received, with the token it carried
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Register(String),
    Login(String),
    List(Option<String>),
    Create(Option<String>, LeadDraft),
    Update(Option<String>, LeadId, LeadDraft),
    Delete(Option<String>, LeadId),
}

#[derive(Default)]
pub(crate) struct FakeApi {
    replies: RefCell<HashMap<&'static str, VecDeque<ApiResult<Value>>>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next call of `op`
    pub(crate) fn reply(self, op: &'static str, reply: ApiResult<Value>) -> Self {
        self.push(op, reply);
        self
    }

    pub(crate) fn push(&self, op: &'static str, reply: ApiResult<Value>) {
        self.replies.borrow_mut().entry(op).or_default().push_back(reply);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn next(&self, op: &'static str, call: Call) -> ApiResult<Value> {
        self.calls.borrow_mut().push(call);
        self.replies
            .borrow_mut()
            .get_mut(op)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(ApiError::Network(format!("no scripted reply for {}", op))))
    }
}

#[async_trait(?Send)]
impl LeadApi for FakeApi {
    async fn register(&self, registration: &Registration) -> ApiResult<Value> {
        self.next(REGISTER, Call::Register(registration.email.clone()))
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<Value> {
        self.next(LOGIN, Call::Login(credentials.email.clone()))
    }

    async fn list_leads(&self, token: Option<&str>) -> ApiResult<Value> {
        self.next(LIST, Call::List(token.map(str::to_string)))
    }

    async fn create_lead(&self, token: Option<&str>, draft: &LeadDraft) -> ApiResult<Value> {
        self.next(CREATE, Call::Create(token.map(str::to_string), draft.clone()))
    }

    async fn update_lead(
        &self,
        token: Option<&str>,
        id: &LeadId,
        draft: &LeadDraft,
    ) -> ApiResult<Value> {
        self.next(
            UPDATE,
            Call::Update(token.map(str::to_string), id.clone(), draft.clone()),
        )
    }

    async fn delete_lead(&self, token: Option<&str>, id: &LeadId) -> ApiResult<Value> {
        self.next(DELETE, Call::Delete(token.map(str::to_string), id.clone()))
    }
}
