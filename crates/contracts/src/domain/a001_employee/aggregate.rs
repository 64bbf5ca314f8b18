use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{optional_string_or_number, string_or_number};
use crate::domain::common::AggregateRoot;
use crate::shared::report::Reportable;
use crate::shared::search::Searchable;
use crate::shared::validation::{self, FieldError};

/// Options offered by the gender select
pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

// ============================================================================
// Aggregate Root
// ============================================================================

/// Сотрудник салона, как его отдаёт backend
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Employee {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(rename = "EmpID", default, deserialize_with = "string_or_number")]
    pub emp_id: String,

    #[serde(rename = "FirstName", default, deserialize_with = "string_or_number")]
    pub first_name: String,

    #[serde(rename = "LastName", default, deserialize_with = "string_or_number")]
    pub last_name: String,

    #[serde(rename = "Age", default, deserialize_with = "string_or_number")]
    pub age: String,

    #[serde(rename = "Gender", default, deserialize_with = "string_or_number")]
    pub gender: String,

    #[serde(rename = "ContactNo", default, deserialize_with = "string_or_number")]
    pub contact_no: String,

    #[serde(rename = "Email", default, deserialize_with = "string_or_number")]
    pub email: String,
}

impl Employee {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl AggregateRoot for Employee {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn entity_key() -> &'static str {
        "employee"
    }

    fn collection_name() -> &'static str {
        "employees"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

impl Searchable for Employee {
    fn search_values(&self) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_default(),
            self.emp_id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.age.clone(),
            self.gender.clone(),
            self.contact_no.clone(),
            self.email.clone(),
        ]
    }
}

impl Reportable for Employee {
    fn report_entity() -> &'static str {
        "Employee"
    }

    fn report_columns() -> &'static [&'static str] {
        &[
            "Employee No",
            "First Name",
            "Last Name",
            "Age",
            "Gender",
            "Contact No",
            "Email",
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.emp_id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.age.clone(),
            self.gender.clone(),
            self.contact_no.clone(),
            self.email.clone(),
        ]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for `POST /employees` and `PUT /employees/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    #[serde(rename = "FirstName")]
    pub first_name: String,

    #[serde(rename = "LastName")]
    pub last_name: String,

    #[serde(rename = "Age")]
    pub age: u32,

    #[serde(rename = "Gender")]
    pub gender: String,

    #[serde(rename = "ContactNo")]
    pub contact_no: String,

    #[serde(rename = "Email")]
    pub email: String,
}

/// Raw text of the employee form, as typed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub gender: String,
    pub contact_no: String,
    pub email: String,
}

impl EmployeeForm {
    pub fn from_record(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            age: employee.age.clone(),
            gender: employee.gender.clone(),
            contact_no: employee.contact_no.clone(),
            email: employee.email.clone(),
        }
    }

    /// Validates in form order and builds the request payload.
    pub fn validate(&self) -> Result<EmployeeDto, FieldError> {
        validation::require("First Name", &self.first_name)?;
        validation::require("Last Name", &self.last_name)?;
        let age = validation::parse_age(&self.age)?;
        validation::require("Gender", &self.gender)?;
        validation::validate_contact_no(&self.contact_no)?;
        validation::validate_email(&self.email)?;

        Ok(EmployeeDto {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age,
            gender: self.gender.clone(),
            contact_no: self.contact_no.clone(),
            email: self.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::{decode_collection, Collection};
    use crate::shared::search::filter_records;

    fn valid_form() -> EmployeeForm {
        EmployeeForm {
            first_name: "Nimal".into(),
            last_name: "Perera".into(),
            age: "29".into(),
            gender: "Male".into(),
            contact_no: "0771234567".into(),
            email: "nimal@salon.lk".into(),
        }
    }

    #[test]
    fn test_decode_backend_payload() {
        let body = r#"{"count":1,"data":[{"_id":"65f0c0ffee","EmpID":"E001","FirstName":"Nimal","LastName":"Perera","Age":29,"Gender":"Male","ContactNo":"0771234567","Email":"nimal@salon.lk","__v":0}]}"#;
        let records = match decode_collection::<Employee>(body).unwrap() {
            Collection::Records(records) => records,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(records.len(), 1);
        let e = &records[0];
        assert_eq!(e.id.as_deref(), Some("65f0c0ffee"));
        assert_eq!(e.age, "29");
        assert_eq!(e.display_name(), "Nimal Perera");
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let dto = valid_form().validate().unwrap();
        assert_eq!(dto.age, 29);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["FirstName"], "Nimal");
        assert_eq!(json["Age"], 29);
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_validation_order_and_messages() {
        let mut form = EmployeeForm::default();
        assert_eq!(form.validate().unwrap_err().to_string(), "First Name is required!");

        form = EmployeeForm { age: "abc".into(), ..valid_form() };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Age must be a valid positive number!"
        );

        form = EmployeeForm { gender: " ".into(), ..valid_form() };
        assert_eq!(form.validate().unwrap_err().to_string(), "Gender is required!");

        form = EmployeeForm { contact_no: "12345".into(), ..valid_form() };
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Contact No must be a valid 10-digit number!"
        );

        form = EmployeeForm { email: "nimal.salon.lk".into(), ..valid_form() };
        assert_eq!(form.validate().unwrap_err().field(), "Email");
    }

    #[test]
    fn test_round_trip_through_edit_form() {
        let employee = Employee {
            id: Some("1".into()),
            emp_id: "E001".into(),
            first_name: "Kumari".into(),
            last_name: "Silva".into(),
            age: "31".into(),
            gender: "Female".into(),
            contact_no: "0711111111".into(),
            email: "kumari@salon.lk".into(),
        };
        let form = EmployeeForm::from_record(&employee);
        assert_eq!(form.validate().unwrap().age, 31);
    }

    #[test]
    fn test_search_and_report_cells() {
        let employees = vec![
            Employee { emp_id: "E001".into(), first_name: "Nimal".into(), ..Default::default() },
            Employee { emp_id: "E002".into(), first_name: "Kumari".into(), ..Default::default() },
        ];
        let found = filter_records(&employees, "kum");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].emp_id, "E002");

        assert_eq!(
            employees[0].report_cells().len(),
            Employee::report_columns().len()
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(Employee::full_name(), "a001_employee");
        assert_eq!(Employee::collection_path(), "/employees");
        assert_eq!(Employee::record_path("42"), "/employees/42");
    }
}
