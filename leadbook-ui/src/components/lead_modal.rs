//! Lead Modal Component
//!
//! Create/edit form bound to the dashboard's draft. The form is rebuilt only
//! when the modal opens or closes; field edits update the draft in place.

use leptos::*;

use leadbook::{LeadDraft, LeadStatus};

use crate::state::DashboardState;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn LeadModal(state: DashboardState) -> impl IntoView {
    let header = create_memo(move |_| {
        state
            .dashboard
            .with(|d| d.modal().map(|m| (m.title(), m.submit_label())))
    });

    move || {
        header.get().map(|(title, submit_label)| {
            view! { <ModalForm state=state title=title submit_label=submit_label /> }
        })
    }
}

#[component]
fn ModalForm(
    state: DashboardState,
    title: &'static str,
    submit_label: &'static str,
) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    let status = draft_value(state, |d| d.status.as_str().to_string());

    view! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50">
            <div class="bg-white rounded-lg shadow-xl p-6 w-full max-w-md">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-xl font-bold text-gray-800">{title}</h3>
                    <button
                        type="button"
                        on:click=move |_| state.close_modal()
                        class="text-gray-500 hover:text-gray-700 text-2xl leading-none"
                    >
                        "×"
                    </button>
                </div>

                <form on:submit=on_submit>
                    <Field label="Name *">
                        <input
                            type="text"
                            name="name"
                            required
                            class=INPUT_CLASS
                            prop:value=draft_value(state, |d| d.name.clone())
                            on:input=draft_setter(state, |d, v| d.name = v)
                        />
                    </Field>

                    <Field label="Email *">
                        <input
                            type="email"
                            name="email"
                            required
                            class=INPUT_CLASS
                            prop:value=draft_value(state, |d| d.email.clone())
                            on:input=draft_setter(state, |d, v| d.email = v)
                        />
                    </Field>

                    <Field label="Phone *">
                        <input
                            type="tel"
                            name="phone"
                            required
                            class=INPUT_CLASS
                            prop:value=draft_value(state, |d| d.phone.clone())
                            on:input=draft_setter(state, |d, v| d.phone = v)
                        />
                    </Field>

                    <div class="mb-6">
                        <label class="block text-gray-700 text-sm font-bold mb-2">"Status *"</label>
                        <select
                            name="status"
                            required
                            class=INPUT_CLASS
                            on:change=draft_setter(state, |d, v| {
                                if let Ok(status) = v.parse() {
                                    d.status = status;
                                }
                            })
                        >
                            {LeadStatus::ALL.into_iter().map(|option| view! {
                                <option
                                    value=option.as_str()
                                    selected=move || status() == option.as_str()
                                >
                                    {option.as_str()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="flex gap-3">
                        <button
                            type="button"
                            on:click=move |_| state.close_modal()
                            class="flex-1 px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition duration-200"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition duration-200"
                        >
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label class="block text-gray-700 text-sm font-bold mb-2">{label}</label>
            {children()}
        </div>
    }
}

/// Reactive read of one draft field
fn draft_value(state: DashboardState, read: fn(&LeadDraft) -> String) -> impl Fn() -> String + Copy {
    move || {
        state
            .dashboard
            .with(|d| d.modal().map(|m| read(&m.draft)).unwrap_or_default())
    }
}

/// Input handler writing one draft field
fn draft_setter(
    state: DashboardState,
    write: fn(&mut LeadDraft, String),
) -> impl Fn(web_sys::Event) + Copy {
    move |ev| {
        let value = event_target_value(&ev);
        state.dashboard.update(|d| {
            if let Some(draft) = d.draft_mut() {
                write(draft, value);
            }
        });
    }
}
