use crate::chat::components::AddNewBrainButton;
use leptos::prelude::*;

/// Chat page. The mention dropdown lists the brains available for `@`
/// mentions; the list is fetched elsewhere, here only the trailing
/// "add new brain" action is rendered.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <main class="chat-page">
            <h1 class="chat-page__title">{t!("chat.title").to_string()}</h1>
            <div class="mention-input">
                <div class="mention-input__dropdown">
                    <AddNewBrainButton />
                </div>
            </div>
        </main>
    }
}
