use crate::domain::a001_employee::api::{create_employee, fetch_employee, update_employee};
use crate::layout::modal_service::{saved_text, ModalService};
use contracts::domain::a001_employee::{Employee, EmployeeDto, EmployeeForm};
use contracts::domain::common::AggregateRoot;
use contracts::shared::validation::FieldError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the employee form
#[derive(Clone, Copy)]
pub struct EmployeeDetailsVm {
    /// Server-assigned number, shown read-only when editing
    pub emp_id: RwSignal<String>,
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub age: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub contact_no: RwSignal<String>,
    pub email: RwSignal<String>,

    pub saving: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    /// Label of the field that failed the last validation
    pub invalid_field: RwSignal<Option<&'static str>>,
}

impl EmployeeDetailsVm {
    pub fn new() -> Self {
        Self {
            emp_id: RwSignal::new(String::new()),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            age: RwSignal::new(String::new()),
            gender: RwSignal::new(String::new()),
            contact_no: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            saving: RwSignal::new(false),
            load_error: RwSignal::new(None),
            invalid_field: RwSignal::new(None),
        }
    }

    /// Current raw input
    pub fn form(&self) -> EmployeeForm {
        EmployeeForm {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            age: self.age.get_untracked(),
            gender: self.gender.get_untracked(),
            contact_no: self.contact_no.get_untracked(),
            email: self.email.get_untracked(),
        }
    }

    fn apply(&self, employee: &Employee) {
        let form = EmployeeForm::from_record(employee);
        self.emp_id.set(employee.emp_id.clone());
        self.first_name.set(form.first_name);
        self.last_name.set(form.last_name);
        self.age.set(form.age);
        self.gender.set(form.gender);
        self.contact_no.set(form.contact_no);
        self.email.set(form.email);
    }

    /// Load the record being edited
    pub fn load(&self, id: String) {
        let this = *self;
        spawn_local(async move {
            match fetch_employee(&id).await {
                Ok(employee) => this.apply(&employee),
                Err(e) => {
                    log::error!("Failed to load employee {}: {}", id, e);
                    this.load_error.set(Some(e));
                }
            }
        });
    }

    /// Validates the current input and remembers which field failed
    pub fn validated(&self) -> Result<EmployeeDto, FieldError> {
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

    /// Validate, then create (`id == None`) or update. Nothing is sent when
    /// validation fails.
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
                Some(id) => update_employee(id, &dto).await,
                None => create_employee(&dto).await,
            };
            saving.set(false);

            match result {
                Ok(()) => modal.success_then(
                    saved_text(Employee::element_name(), id.is_some()),
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
    fn test_failed_field_is_remembered_until_fixed() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = EmployeeDetailsVm::new();
            vm.first_name.set("Nimal".to_string());
            vm.last_name.set("Perera".to_string());
            vm.age.set("25".to_string());
            vm.gender.set("Male".to_string());
            vm.contact_no.set("077123456".to_string());
            vm.email.set("nimal@example.com".to_string());

            assert_eq!(vm.validated().unwrap_err().field(), "Contact No");
            assert_eq!(vm.invalid_field.get_untracked(), Some("Contact No"));
            assert_eq!(vm.label_style("Contact No"), "color: var(--color-error);");
            assert_eq!(vm.label_style("Email"), "");

            vm.contact_no.set("0771234567".to_string());
            assert!(vm.validated().is_ok());
            assert_eq!(vm.invalid_field.get_untracked(), None);
            assert_eq!(vm.label_style("Contact No"), "");
        });
    }
}
