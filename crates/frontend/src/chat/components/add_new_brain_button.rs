use crate::routes::routes::BRAINS_MANAGEMENT_PATH;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Link shown at the bottom of the brain mention dropdown. Navigates to the
/// brains management page; label on the left, "add" glyph on the right.
///
/// Plain link semantics: middle-click and open-in-new-tab keep working, the
/// router intercepts ordinary clicks for client-side navigation.
#[component]
pub fn AddNewBrainButton() -> impl IntoView {
    view! {
        <A
            href=BRAINS_MANAGEMENT_PATH
            attr:class="flex px-5 py-3 text-sm decoration-none text-center w-full justify-between items-center"
        >
            {t!("chat.new_brain").to_string()}
            {icon("add")}
        </A>
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_new_brain_label_resolves() {
        rust_i18n::set_locale("en");
        assert_eq!(t!("chat.new_brain"), "Add new brain");
    }

    #[test]
    fn test_missing_key_falls_back_to_locale_prefixed_key() {
        rust_i18n::set_locale("en");
        assert_eq!(t!("chat.no_such_key"), "en.chat.no_such_key");
    }
}
