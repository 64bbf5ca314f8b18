//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Этот модуль содержит функцию `render_tab_content`, которая по ключу таба
//! возвращает соответствующий View. Все tab keys собраны здесь в одном месте.

use super::keys::{parse_key, TabRoute};
use crate::domain::a001_employee::ui::card::EmployeeCard;
use crate::domain::a001_employee::ui::details::EmployeeDetails;
use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::domain::a002_supplier::ui::card::SupplierCard;
use crate::domain::a002_supplier::ui::details::SupplierDetails;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_supplier::Supplier;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a001_employee", "a002_supplier_edit_<id>")
/// * `tabs_store` - контекст для закрытия таба (используется в формах и карточках)
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_| tabs_store.close_tab(&key_for_close));

    // ═══════════════════════════════════════════════════════════════════
    // a001: Employees
    // ═══════════════════════════════════════════════════════════════════
    if let Some(route) = parse_key::<Employee>(key) {
        return match route {
            TabRoute::List => view! { <EmployeeList /> }.into_any(),
            TabRoute::New => view! { <EmployeeDetails id=None on_close=on_close /> }.into_any(),
            TabRoute::Edit(id) => {
                log!("✅ Creating EmployeeDetails with id: {}", id);
                view! { <EmployeeDetails id=Some(id.to_string()) on_close=on_close /> }.into_any()
            }
            TabRoute::Detail(id) => {
                view! { <EmployeeCard id=id.to_string() on_close=on_close /> }.into_any()
            }
        };
    }

    // ═══════════════════════════════════════════════════════════════════
    // a002: Suppliers
    // ═══════════════════════════════════════════════════════════════════
    if let Some(route) = parse_key::<Supplier>(key) {
        return match route {
            TabRoute::List => view! { <SupplierList /> }.into_any(),
            TabRoute::New => view! { <SupplierDetails id=None on_close=on_close /> }.into_any(),
            TabRoute::Edit(id) => {
                log!("✅ Creating SupplierDetails with id: {}", id);
                view! { <SupplierDetails id=Some(id.to_string()) on_close=on_close /> }.into_any()
            }
            TabRoute::Detail(id) => {
                view! { <SupplierCard id=id.to_string() on_close=on_close /> }.into_any()
            }
        };
    }

    // ═══════════════════════════════════════════════════════════════════
    // Unknown / Fallback
    // ═══════════════════════════════════════════════════════════════════
    log!("⚠️ Unknown tab type: {}", key);
    view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
}
