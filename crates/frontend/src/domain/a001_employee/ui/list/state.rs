use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeeListState {
    /// Live search text, applied on every keystroke
    pub search: String,
}

pub fn create_state() -> RwSignal<EmployeeListState> {
    RwSignal::new(EmployeeListState::default())
}
