//! App Root Component
//!
//! Main application component with routing and the session provider.

use leptos::*;
use leptos_router::*;

use leadbook::routes::{DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH, ROOT_PATH};

use crate::components::Protected;
use crate::pages::{Dashboard, Login, Register};
use crate::state::provide_auth_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Restore the stored session before any route renders
    provide_auth_state();

    view! {
        <Router>
            <Routes>
                <Route path=LOGIN_PATH view=Login />
                <Route path=REGISTER_PATH view=Register />
                <Route
                    path=DASHBOARD_PATH
                    view=|| view! { <Protected><Dashboard /></Protected> }
                />
                <Route path=ROOT_PATH view=|| view! { <Redirect path=DASHBOARD_PATH /> } />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-9xl font-bold text-blue-600 mb-4">"404"</h1>
                <h2 class="text-3xl font-semibold text-gray-800 mb-4">"Page Not Found"</h2>
                <p class="text-gray-600 mb-8">"The page you're looking for doesn't exist."</p>
                <A
                    href=DASHBOARD_PATH
                    class="inline-block px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition duration-200"
                >
                    "Go to Dashboard"
                </A>
            </div>
        </div>
    }
}
