//! Lead Table Component
//!
//! One row per lead with its status badge and edit/delete actions.

use leptos::*;

use leadbook::Lead;

use crate::state::DashboardState;

const COLUMNS: [&str; 5] = ["Name", "Email", "Phone", "Status", "Created"];

#[component]
pub fn LeadTable(state: DashboardState) -> impl IntoView {
    let leads = create_memo(move |_| state.dashboard.with(|d| d.leads().to_vec()));
    let rows = move || {
        leads
            .get()
            .into_iter()
            .map(|lead| view! { <LeadRow state=state lead=lead /> })
            .collect_view()
    };

    view! {
        <div class="bg-white rounded-lg shadow overflow-hidden">
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            {COLUMNS.iter().map(|label| view! {
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">
                                    {*label}
                                </th>
                            }).collect_view()}
                            <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        {rows}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn LeadRow(state: DashboardState, lead: Lead) -> impl IntoView {
    let edit_id = lead.id.clone();
    let delete_id = lead.id.clone();
    let badge = format!(
        "px-3 py-1 inline-flex text-xs leading-5 font-semibold rounded-full {}",
        lead.status.badge_class()
    );

    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm font-medium text-gray-900">{lead.name.clone()}</div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm text-gray-600">{lead.email.clone()}</div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="text-sm text-gray-600">{lead.phone.clone()}</div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class=badge>{lead.status.to_string()}</span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-600">
                {lead.created_label()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                <button
                    on:click=move |_| state.open_edit(edit_id.clone())
                    class="text-blue-600 hover:text-blue-900 mr-3"
                    title="Edit"
                >
                    "Edit"
                </button>
                <button
                    on:click=move |_| state.delete(delete_id.clone())
                    class="text-red-600 hover:text-red-900"
                    title="Delete"
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
