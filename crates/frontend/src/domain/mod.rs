pub mod a001_employee;
pub mod a002_supplier;
pub mod a003_inventory_item;
