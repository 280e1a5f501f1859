// web_app/components/inventory.rs - Smart-entry components
//
// - EntryForm: free-text description input with submit button
// - ItemsTable: parsed items from the latest successful submission

use leptos::prelude::*;

use super::common::{Button, InlineError};
use crate::web_app::model::{format_expire_date, InventoryItem};

pub const DESCRIPTION_PLACEHOLDER: &str = "例如：2盒牛奶，保质期5天；3个苹果，下周一过期";
pub const EMPTY_TABLE_MESSAGE: &str = "暂无物品，请添加物品";
pub const TABLE_HEADERS: [&str; 4] = ["物品名称", "数量", "单位", "过期时间"];

/// Label of the submit button for the given loading state
pub fn submit_label(loading: bool) -> &'static str {
    if loading {
        "处理中..."
    } else {
        "添加到清单"
    }
}

/// Description form
///
/// The button is disabled while a submission is in flight.
#[component]
pub fn EntryForm(
    /// Current description text
    description: RwSignal<String>,
    /// Whether a submission is in flight
    #[prop(into)]
    loading: Signal<bool>,
    /// Error to show under the button
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Called when the form is submitted
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form on:submit=handle_submit class="space-y-4">
            <div class="space-y-2">
                <label class="text-sm font-medium block">
                    "物品描述（使用自然语言）"
                </label>
                <input
                    id="description"
                    type="text"
                    placeholder=DESCRIPTION_PLACEHOLDER
                    class="w-full px-3 py-2 border border-gray-300 rounded-md \
                           focus:ring-2 focus:ring-gray-400 outline-none"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <p class="text-xs text-gray-500">
                    "提示：您可以一次性输入多个物品，并指定数量和过期时间"
                </p>
            </div>
            <Button button_type="submit" disabled=loading>
                {move || submit_label(loading.get())}
            </Button>
            {move || error.get().map(|e| view! { <InlineError error=e /> })}
        </form>
    }
}

/// One table row
#[component]
pub fn ItemRow(item: InventoryItem) -> impl IntoView {
    let expires = format_expire_date(&item.expire_date);

    view! {
        <tr class="border-b hover:bg-gray-50">
            <td class="p-3 font-medium">{item.item}</td>
            <td class="p-3">{item.quantity.to_string()}</td>
            <td class="p-3">{item.unit}</td>
            <td class="p-3">{expires}</td>
        </tr>
    }
}

/// Parsed item table, or a placeholder when there is nothing to show
#[component]
pub fn ItemsTable(
    #[prop(into)]
    items: Signal<Vec<InventoryItem>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !items.with(|i| i.is_empty())
            fallback=|| view! {
                <p class="text-center py-4 text-gray-500">{EMPTY_TABLE_MESSAGE}</p>
            }
        >
            <table class="w-full text-sm text-left">
                <thead>
                    <tr class="border-b">
                        {TABLE_HEADERS.into_iter().map(|h| view! {
                            <th class="p-3 font-medium text-gray-500">{h}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || items.get().into_iter().map(|item| view! {
                        <ItemRow item=item />
                    }).collect_view()}
                </tbody>
            </table>
        </Show>
    }
}
