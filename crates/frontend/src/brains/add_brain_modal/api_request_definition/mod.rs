pub mod tab_trigger;
pub mod types;

pub use tab_trigger::BrainDefinitionTabTrigger;
pub use types::ApiTab;

use crate::shared::components::ui::tabs::{TabGroup, TabList};
use leptos::prelude::*;

/// API request definition section of the add-brain modal.
///
/// Owns the active tab. Triggers report activation through `on_change`,
/// `selected` is recomputed here as strict equality against the active tab,
/// so a trigger can never disagree with the group about who is selected.
#[component]
pub fn ApiRequestDefinition() -> impl IntoView {
    let active = RwSignal::new(ApiTab::Params);

    let on_change = Callback::new(move |tab: ApiTab| active.set(tab));
    // Keyboard traversal comes back from the group as a raw value; unknown
    // values are dropped rather than trusted.
    let on_group_change = Callback::new(move |value: String| {
        match ApiTab::from_value(&value) {
            Some(tab) => active.set(tab),
            None => log::warn!("ignoring unknown api tab value: {value}"),
        }
    });
    let group_value = Signal::derive(move || active.get().as_str().to_string());

    view! {
        <div class="api-request-definition">
            <TabGroup value=group_value on_change=on_group_change>
                <TabList>
                    {ApiTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <BrainDefinitionTabTrigger
                                    label=tab.label()
                                    value=tab
                                    selected=Signal::derive(move || active.get() == tab)
                                    on_change=on_change
                                />
                            }
                        })
                        .collect_view()}
                </TabList>
                <div class="definition-panel" role="tabpanel">
                    {move || match active.get() {
                        ApiTab::Params => view! {
                            <p class="definition-panel__hint">
                                {t!("brain.api.params_hint").to_string()}
                            </p>
                        }.into_any(),
                        ApiTab::Headers => view! {
                            <p class="definition-panel__hint">
                                {t!("brain.api.headers_hint").to_string()}
                            </p>
                        }.into_any(),
                        ApiTab::SearchParams => view! {
                            <p class="definition-panel__hint">
                                {t!("brain.api.search_params_hint").to_string()}
                            </p>
                        }.into_any(),
                    }}
                </div>
            </TabGroup>
        </div>
    }
}
