use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Keys that dismiss the modal.
fn closes_modal(key: &str) -> bool {
    key == "Escape"
}

#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Close on Escape. The listener is tied to this component's reactive
    // owner and is removed when the modal unmounts.
    window_event_listener(ev::keydown, move |event| {
        if closes_modal(&event.key()) {
            on_close.run(());
        }
    });

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" role="dialog" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_escape_closes() {
        assert!(closes_modal("Escape"));
        assert!(!closes_modal("Enter"));
        assert!(!closes_modal("escape"));
        assert!(!closes_modal(""));
    }
}
