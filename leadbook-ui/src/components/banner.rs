//! Status Banners
//!
//! Error and success messages above the lead table.

use leptos::*;

use leadbook::BannerKind;

use crate::state::DashboardState;

/// Both banner slots, error first
#[component]
pub fn StatusBanners(state: DashboardState) -> impl IntoView {
    view! {
        <BannerSlot state=state kind=BannerKind::Error />
        <BannerSlot state=state kind=BannerKind::Success />
    }
}

#[component]
fn BannerSlot(state: DashboardState, kind: BannerKind) -> impl IntoView {
    let class = match kind {
        BannerKind::Error => "mb-4 p-4 bg-red-100 border border-red-400 text-red-700 rounded-lg",
        BannerKind::Success => {
            "mb-4 p-4 bg-green-100 border border-green-400 text-green-700 rounded-lg"
        }
    };

    move || {
        state
            .dashboard
            .with(|d| d.banners().current(kind).map(|b| b.message.clone()))
            .map(|message| view! { <div class=class role="alert">{message}</div> })
    }
}
