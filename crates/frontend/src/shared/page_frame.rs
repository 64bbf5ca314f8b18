//! Root element of every page shown in a tab.

use super::page_standard::*;
use leptos::prelude::*;

/// Sets `id="{aggregate}--{category}"`, `data-page-category` and the
/// `page` / `page--detail` / `page--form` classes.
#[component]
pub fn PageFrame(
    /// e.g. `"a001_employee--list"`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {}", page_id);
    debug_assert!(is_known_category(category), "unknown page category: {}", category);

    let mut classes = vec!["page"];
    match category {
        PAGE_CAT_DETAIL => classes.push("page--detail"),
        PAGE_CAT_FORM => classes.push("page--form"),
        _ => {}
    }
    if !class.is_empty() {
        classes.push(class);
    }

    view! {
        <div id=page_id class=classes.join(" ") data-page-category=category>
            {children()}
        </div>
    }
}
