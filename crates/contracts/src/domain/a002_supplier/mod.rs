pub mod aggregate;
pub mod notification;

pub use aggregate::{Supplier, SupplierDto, SupplierForm};
