//! Route Guard
//!
//! Renders its children only with a session; otherwise redirects to login.

use leptos::*;
use leptos_router::*;

use leadbook::routes;

use crate::state::use_auth;

#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    move || match routes::guard(auth.is_authenticated()) {
        Some(target) => view! { <Redirect path=target /> }.into_view(),
        None => children().into_view(),
    }
}
