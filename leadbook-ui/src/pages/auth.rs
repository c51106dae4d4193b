//! Login and Registration Pages

use leptos::*;
use leptos_router::*;

use leadbook::routes::{DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH};
use leadbook::{Credentials, Registration};

use crate::state::use_auth;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        set_error.set(None);

        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            match auth.login(credentials).await {
                Ok(()) => navigate(DASHBOARD_PATH, Default::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <AuthCard title="Login" error=error>
            <form on:submit=on_submit class="space-y-4">
                <input
                    type="email"
                    placeholder="Email"
                    required
                    class=INPUT_CLASS
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    class=INPUT_CLASS
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <SubmitButton label="Login" busy_label="Logging in..." submitting=submitting />
            </form>
            <p class="text-center text-sm text-gray-600 mt-4">
                "Don't have an account? "
                <A href=REGISTER_PATH class="text-blue-600 hover:underline">"Register"</A>
            </p>
        </AuthCard>
    }
}

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        set_error.set(None);

        let registration = Registration {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();

        spawn_local(async move {
            match auth.register(registration).await {
                Ok(()) => navigate(DASHBOARD_PATH, Default::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <AuthCard title="Register" error=error>
            <form on:submit=on_submit class="space-y-4">
                <input
                    type="text"
                    placeholder="Name"
                    required
                    class=INPUT_CLASS
                    prop:value=name
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    required
                    class=INPUT_CLASS
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    class=INPUT_CLASS
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <SubmitButton label="Register" busy_label="Creating account..." submitting=submitting />
            </form>
            <p class="text-center text-sm text-gray-600 mt-4">
                "Already have an account? "
                <A href=LOGIN_PATH class="text-blue-600 hover:underline">"Login"</A>
            </p>
        </AuthCard>
    }
}

#[component]
fn AuthCard(title: &'static str, error: ReadSignal<Option<String>>, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center p-4">
            <div class="bg-white rounded-lg shadow-xl p-8 w-full max-w-md">
                <h1 class="text-2xl font-bold text-gray-800 text-center mb-6">{title}</h1>
                {move || error.get().map(|message| view! {
                    <div class="mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded-lg text-sm">
                        {message}
                    </div>
                })}
                {children()}
            </div>
        </div>
    }
}

#[component]
fn SubmitButton(
    label: &'static str,
    busy_label: &'static str,
    submitting: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || submitting.get()
            class="w-full px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700
                   disabled:bg-gray-400 disabled:cursor-not-allowed transition duration-200"
        >
            {move || if submitting.get() { busy_label } else { label }}
        </button>
    }
}
