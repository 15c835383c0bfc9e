pub mod api_request_definition;

use crate::shared::modal::Modal;
use api_request_definition::ApiRequestDefinition;
use leptos::prelude::*;

/// Modal for configuring a new brain. This slice carries only the
/// API-request-definition section; name, description and permission steps
/// live elsewhere.
#[component]
pub fn AddBrainModal(
    /// Callback when the modal should close
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title=t!("brain.add_new_brain").to_string() on_close=on_close>
            <ApiRequestDefinition />
        </Modal>
    }
}
