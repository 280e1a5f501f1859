// web_app/pages/smart_expiry.rs - Smart-entry page
//
// Owns the description text and the EntryState for one visit. Both are
// dropped when the user navigates away.

use leptos::prelude::*;
use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::{into_record_error, record_items};

#[component]
pub fn SmartExpiryPage() -> impl IntoView {
    let description = RwSignal::new(String::new());
    let entry = RwSignal::new(EntryState::default());

    let items = Signal::derive(move || entry.with(|s| s.items.clone()));
    let loading = Signal::derive(move || entry.with(|s| s.loading));
    let error = Signal::derive(move || entry.with(|s| s.error.clone()));

    let on_submit = Callback::new(move |()| {
        let text = description.get_untracked();
        let now = chrono::Local::now().naive_local();

        // Empty input only sets the validation error; an in-flight request
        // blocks the new one.
        let Some(Ok(request)) = entry.try_update(|s| s.begin_submit(&text, now)) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = record_items(request).await.map_err(into_record_error);
            entry.update(|s| s.finish_submit(outcome));
        });
    });

    view! {
        <div class="container mx-auto py-8 px-4">
            <h1 class="text-3xl font-bold mb-8 text-center">"SmartExpiry - 智能物品管理"</h1>

            <Card title="添加物品" class="mb-8">
                <EntryForm
                    description=description
                    loading=loading
                    error=error
                    on_submit=on_submit
                />
            </Card>

            <Card title="物品清单">
                <ItemsTable items=items />
            </Card>
        </div>
    }
}
