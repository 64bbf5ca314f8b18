use crate::domain::a002_supplier::api::{create_supplier, fetch_supplier, update_supplier};
use crate::domain::a003_inventory_item::api::fetch_inventory_items;
use crate::layout::modal_service::{saved_text, ModalService};
use contracts::domain::a002_supplier::{Supplier, SupplierDto, SupplierForm};
use contracts::domain::a003_inventory_item::InventoryItem;
use contracts::domain::common::AggregateRoot;
use contracts::shared::validation::FieldError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the supplier form
#[derive(Clone, Copy)]
pub struct SupplierDetailsVm {
    pub supplier_id: RwSignal<String>,
    pub supplier_name: RwSignal<String>,
    pub item_no: RwSignal<String>,
    /// Follows `item_no`, never typed
    pub item_name: RwSignal<String>,
    pub contact_no: RwSignal<String>,
    pub email: RwSignal<String>,
    pub address: RwSignal<String>,

    /// Inventory items offered by the item picker
    pub items: RwSignal<Vec<InventoryItem>>,
    pub saving: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    /// Label of the field that failed the last validation
    pub invalid_field: RwSignal<Option<&'static str>>,
}

impl SupplierDetailsVm {
    pub fn new() -> Self {
        Self {
            supplier_id: RwSignal::new(String::new()),
            supplier_name: RwSignal::new(String::new()),
            item_no: RwSignal::new(String::new()),
            item_name: RwSignal::new(String::new()),
            contact_no: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            items: RwSignal::new(Vec::new()),
            saving: RwSignal::new(false),
            load_error: RwSignal::new(None),
            invalid_field: RwSignal::new(None),
        }
    }

    pub fn form(&self) -> SupplierForm {
        SupplierForm {
            supplier_name: self.supplier_name.get_untracked(),
            item_no: self.item_no.get_untracked(),
            item_name: self.item_name.get_untracked(),
            contact_no: self.contact_no.get_untracked(),
            email: self.email.get_untracked(),
            address: self.address.get_untracked(),
        }
    }

    fn apply(&self, supplier: &Supplier) {
        let form = SupplierForm::from_record(supplier);
        self.supplier_id.set(supplier.supplier_id.clone());
        self.supplier_name.set(form.supplier_name);
        self.item_no.set(form.item_no);
        self.item_name.set(form.item_name);
        self.contact_no.set(form.contact_no);
        self.email.set(form.email);
        self.address.set(form.address);
    }

    /// Load the inventory picker. A failure leaves the picker empty.
    pub fn load_items(&self) {
        let items = self.items;
        spawn_local(async move {
            match fetch_inventory_items().await {
                Ok(v) => items.set(v),
                Err(e) => log::error!("Failed to load inventory items: {}", e),
            }
        });
    }

    pub fn load(&self, id: String) {
        let this = *self;
        spawn_local(async move {
            match fetch_supplier(&id).await {
                Ok(supplier) => this.apply(&supplier),
                Err(e) => {
                    log::error!("Failed to load supplier {}: {}", id, e);
                    this.load_error.set(Some(e));
                }
            }
        });
    }

    /// Выбор позиции склада: наименование подставляется автоматически
    pub fn select_item(&self, item_no: String) {
        let mut form = self.form();
        self.items
            .with_untracked(|items| form.select_item(items, &item_no));
        self.item_no.set(form.item_no);
        self.item_name.set(form.item_name);
    }

    /// Validates the current input and remembers which field failed
    pub fn validated(&self) -> Result<SupplierDto, FieldError> {
        let result = self.form().validate();
        self.invalid_field.set(result.as_ref().err().map(FieldError::field));
        result
    }

    /// Label style for `label`, highlighted while that field is invalid
    pub fn label_style(&self, label: &'static str) -> &'static str {
        if self.invalid_field.get() == Some(label) {
            "color: var(--color-error);"
        } else {
            ""
        }
    }

    pub fn save_command(&self, id: Option<String>, modal: ModalService, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }

        let dto = match self.validated() {
            Ok(dto) => dto,
            Err(e) => {
                modal.error(e.to_string());
                return;
            }
        };

        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => update_supplier(id, &dto).await,
                None => create_supplier(&dto).await,
            };
            saving.set(false);

            match result {
                Ok(()) => modal.success_then(
                    saved_text(Supplier::element_name(), id.is_some()),
                    on_saved,
                ),
                Err(e) => modal.transport_error(&e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_missing_field_is_highlighted() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = SupplierDetailsVm::new();
            vm.supplier_name.set("Glow Supplies".to_string());

            assert!(vm.validated().is_err());
            assert_eq!(vm.invalid_field.get_untracked(), Some("Item No"));

            vm.item_no.set("I-1".to_string());
            vm.contact_no.set("0771234567".to_string());
            vm.email.set("orders@glow.lk".to_string());
            assert!(vm.validated().is_err());
            assert_eq!(vm.invalid_field.get_untracked(), Some("Address"));

            vm.address.set("12 Main St, Gampaha".to_string());
            assert!(vm.validated().is_ok());
            assert_eq!(vm.invalid_field.get_untracked(), None);
        });
    }
}
