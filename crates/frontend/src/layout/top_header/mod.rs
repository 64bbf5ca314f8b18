//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle and the application title.

use crate::layout::global_context::use_app_context;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{config.company_name}</span>
            </div>
        </div>
    }
}
