pub mod aggregate;
pub mod notification;

pub use aggregate::{Employee, EmployeeDto, EmployeeForm, GENDERS};
