//! Tab keys of aggregate pages.
//!
//! `a001_employee` is the list, `a001_employee_new` the create form,
//! `a001_employee_edit_{id}` the edit form and `a001_employee_detail_{id}`
//! the read-only card.

use contracts::domain::common::AggregateRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabRoute<'a> {
    List,
    New,
    Edit(&'a str),
    Detail(&'a str),
}

pub fn list_key<A: AggregateRoot>() -> String {
    A::full_name()
}

pub fn new_key<A: AggregateRoot>() -> String {
    format!("{}_new", A::full_name())
}

pub fn edit_key<A: AggregateRoot>(id: &str) -> String {
    format!("{}_edit_{}", A::full_name(), id)
}

pub fn detail_key<A: AggregateRoot>(id: &str) -> String {
    format!("{}_detail_{}", A::full_name(), id)
}

/// Which page of aggregate `A` the key points at, if any.
pub fn parse_key<A: AggregateRoot>(key: &str) -> Option<TabRoute<'_>> {
    let rest = key.strip_prefix(A::full_name().as_str())?;
    match rest {
        "" => Some(TabRoute::List),
        "_new" => Some(TabRoute::New),
        _ => {
            if let Some(id) = rest.strip_prefix("_edit_").filter(|id| !id.is_empty()) {
                Some(TabRoute::Edit(id))
            } else if let Some(id) = rest.strip_prefix("_detail_").filter(|id| !id.is_empty()) {
                Some(TabRoute::Detail(id))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::Employee;
    use contracts::domain::a002_supplier::Supplier;

    #[test]
    fn test_keys_round_trip_through_parse() {
        assert_eq!(list_key::<Employee>(), "a001_employee");
        assert_eq!(parse_key::<Employee>("a001_employee"), Some(TabRoute::List));
        assert_eq!(parse_key::<Employee>(&new_key::<Employee>()), Some(TabRoute::New));

        let key = edit_key::<Supplier>("66a1f0");
        assert_eq!(key, "a002_supplier_edit_66a1f0");
        assert_eq!(parse_key::<Supplier>(&key), Some(TabRoute::Edit("66a1f0")));

        let key = detail_key::<Supplier>("66a1f0");
        assert_eq!(parse_key::<Supplier>(&key), Some(TabRoute::Detail("66a1f0")));
    }

    #[test]
    fn test_foreign_and_malformed_keys() {
        assert_eq!(parse_key::<Employee>("a002_supplier"), None);
        assert_eq!(parse_key::<Employee>("a001_employee_edit_"), None);
        assert_eq!(parse_key::<Employee>("a001_employeeX"), None);
    }
}
