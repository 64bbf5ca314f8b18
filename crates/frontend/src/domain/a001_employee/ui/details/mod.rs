//! Employee Details UI Module (create / edit form)
//!
//! MVVM pattern:
//! - view_model.rs: form signals, validation and save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::EmployeeDetails;
pub use view_model::EmployeeDetailsVm;
