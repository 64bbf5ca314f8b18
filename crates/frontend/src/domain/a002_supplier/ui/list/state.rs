use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupplierListState {
    pub search: String,
}

pub fn create_state() -> RwSignal<SupplierListState> {
    RwSignal::new(SupplierListState::default())
}
