use crate::layout::center::Tabs;
use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::Shell;
use leptos::prelude::*;

fn restored_tab_title(key: &str) -> String {
    tab_label_for_key(key)
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_app_context();

    // Restores `?active=` once when the layout is created.
    tabs_store.init_router_integration(restored_tab_title);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
