//! Обёртка одного открытого таба.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;

/// Content of one open tab. All open tabs stay mounted so that a list keeps
/// its search text while another tab is in front; inactive ones are hidden
/// with CSS.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let TabData { key, title } = tab;

    let key_for_active = key.clone();
    let is_active = move || {
        tabs_store
            .active
            .with(|active| active.as_deref() == Some(key_for_active.as_str()))
    };

    log::debug!("Tab page mounted: {}", key);
    let key_for_cleanup = key.clone();
    on_cleanup(move || log::debug!("Tab page unmounted: {}", key_for_cleanup));

    let content = render_tab_content(&key, tabs_store);

    view! {
        <section
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=key
            aria-label=title
        >
            {content}
        </section>
    }
}
