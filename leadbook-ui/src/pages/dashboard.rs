//! Dashboard Page
//!
//! The lead list with its create/edit modal and status banners.

use leptos::*;

use leadbook::dashboard::{ListPhase, EMPTY_PLACEHOLDER};

use crate::components::{LeadModal, LeadTable, Nav, StatusBanners};
use crate::state::{use_auth, DashboardState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = DashboardState::new(use_auth());

    // Fetch leads on mount
    state.refresh();

    let heading = move || state.dashboard.with(|d| d.heading());
    let list_view = create_memo(move |_| state.dashboard.with(ListView::of));

    view! {
        <div class="min-h-screen bg-gray-50">
            <Nav />

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <StatusBanners state=state />

                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-xl font-semibold text-gray-800">{heading}</h2>
                    <button
                        on:click=move |_| state.open_create()
                        class="flex items-center gap-2 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition duration-200"
                    >
                        <span class="text-lg leading-none">"+"</span>
                        "Add Lead"
                    </button>
                </div>

                {move || match list_view.get() {
                    ListView::Loading => view! {
                        <div class="flex items-center justify-center py-12">
                            <div class="loading-spinner w-8 h-8" />
                        </div>
                    }.into_view(),
                    ListView::Empty => view! {
                        <div class="bg-white rounded-lg shadow p-12 text-center">
                            <p class="text-gray-500 text-lg">{EMPTY_PLACEHOLDER}</p>
                        </div>
                    }.into_view(),
                    ListView::Table => view! { <LeadTable state=state /> }.into_view(),
                }}
            </main>

            <LeadModal state=state />
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum ListView {
    Loading,
    Empty,
    Table,
}

impl ListView {
    fn of(dashboard: &leadbook::Dashboard) -> Self {
        match (dashboard.is_empty(), dashboard.phase()) {
            (false, _) => ListView::Table,
            (true, ListPhase::Loading) => ListView::Loading,
            (true, ListPhase::Displayed) => ListView::Empty,
        }
    }
}
