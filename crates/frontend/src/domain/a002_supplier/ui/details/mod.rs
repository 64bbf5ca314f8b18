//! Supplier Details UI Module (create / edit form)
//!
//! MVVM pattern:
//! - view_model.rs: form signals, inventory picker, save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::SupplierDetails;
pub use view_model::SupplierDetailsVm;
