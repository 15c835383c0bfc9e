use crate::brains::add_brain_modal::AddBrainModal;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Brains management page, the navigation target of `AddNewBrainButton`.
#[component]
pub fn BrainsManagementPage() -> impl IntoView {
    let show_add_modal = RwSignal::new(false);
    let on_close = Callback::new(move |_| show_add_modal.set(false));

    view! {
        <main class="brains-page">
            <h1 class="brains-page__title">
                {icon("brain")}
                {t!("brain.management_title").to_string()}
            </h1>
            <button
                class="button button--primary"
                on:click=move |_| show_add_modal.set(true)
            >
                {t!("brain.add_new_brain").to_string()}
            </button>
            <Show when=move || show_add_modal.get()>
                <AddBrainModal on_close=on_close />
            </Show>
        </main>
    }
}
