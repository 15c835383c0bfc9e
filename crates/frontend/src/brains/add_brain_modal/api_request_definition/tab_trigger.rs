use super::types::ApiTab;
use crate::shared::components::ui::tabs::TabTrigger;
use leptos::prelude::*;

/// Class string for a definition tab header. Selected tabs get medium weight
/// and a bottom-border indicator.
fn trigger_class(selected: bool) -> String {
    let base = "flex-1 pb-4 border-gray-500 text-md align-center mb-3";
    if selected {
        format!("{base} font-medium border-b-2")
    } else {
        base.to_string()
    }
}

/// One tab header of the API request definition section.
///
/// Selection state is owned by `ApiRequestDefinition`; this component only
/// reflects `selected` visually and reports activation through `on_change`.
#[component]
pub fn BrainDefinitionTabTrigger(
    /// Tab header text
    #[prop(into)]
    label: String,
    /// Which definition tab this trigger represents
    value: ApiTab,
    /// Whether this trigger is the active tab (reactive)
    #[prop(into)]
    selected: Signal<bool>,
    /// Called with `value` once per activation
    on_change: Callback<ApiTab>,
) -> impl IntoView {
    view! {
        <TabTrigger
            value=value.as_str()
            class=Signal::derive(move || trigger_class(selected.get()))
            on_click=Callback::new(move |_| on_change.run(value))
        >
            {label}
        </TabTrigger>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_class_has_indicator() {
        let class = trigger_class(true);
        assert!(class.contains("font-medium"));
        assert!(class.contains("border-b-2"));
    }

    #[test]
    fn test_unselected_class_has_no_indicator() {
        let class = trigger_class(false);
        assert!(!class.contains("font-medium"));
        assert!(!class.contains("border-b-2"));
        assert_eq!(class, "flex-1 pb-4 border-gray-500 text-md align-center mb-3");
    }

    #[test]
    fn test_base_classes_stable_across_selection() {
        let selected = trigger_class(true);
        let unselected = trigger_class(false);
        assert!(selected.starts_with(&unselected));
    }
}
