use crate::brains::page::BrainsManagementPage;
use crate::chat::page::ChatPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Target of the "add new brain" link in the chat mention dropdown.
pub const BRAINS_MANAGEMENT_PATH: &str = "/brains-management";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/") view=ChatPage />
                <Route path=path!("/brains-management") view=BrainsManagementPage />
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brains_management_path() {
        assert_eq!(BRAINS_MANAGEMENT_PATH, "/brains-management");
    }
}
