//! Navigation Component
//!
//! Header bar with the brand, the signed-in user and a logout button.

use leptos::*;
use leptos_router::*;

use leadbook::routes::{DASHBOARD_PATH, LOGIN_PATH};

use crate::state::use_auth;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        auth.logout();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <nav class="bg-white shadow">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href=DASHBOARD_PATH class="text-xl font-bold text-gray-800">
                        "Lead Manager"
                    </A>

                    <div class="flex items-center gap-4">
                        {move || auth.user().map(|user| view! {
                            <span class="text-sm text-gray-600">{user.display_name().to_string()}</span>
                        })}
                        <button
                            on:click=logout
                            class="px-4 py-2 text-sm bg-red-600 text-white rounded-lg hover:bg-red-700 transition duration-200"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
