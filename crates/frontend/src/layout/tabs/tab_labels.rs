//! Tab labels - единственный источник правды для заголовков табов.
//!
//! Names come from the aggregates' `AggregateRoot` metadata in contracts.

use super::keys::{parse_key, TabRoute};
use contracts::domain::a001_employee::Employee;
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::common::AggregateRoot;

/// Возвращает заголовок таба для данного ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    label_for::<Employee>(key)
        .or_else(|| label_for::<Supplier>(key))
        .unwrap_or_else(|| key.to_string())
}

fn label_for<A: AggregateRoot>(key: &str) -> Option<String> {
    let label = match parse_key::<A>(key)? {
        TabRoute::List => A::list_name().to_string(),
        TabRoute::New => format!("New {}", A::element_name()),
        TabRoute::Edit(id) => format!("Edit {}", detail_tab_label(A::element_name(), id)),
        TabRoute::Detail(id) => detail_tab_label(A::element_name(), id),
    };
    Some(label)
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
///
/// Пример: `detail_tab_label("Supplier", "Glow Supplies")` → `"Supplier · Glow Supplies"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}
