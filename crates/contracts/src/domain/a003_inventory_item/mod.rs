pub mod aggregate;

pub use aggregate::{find_item_name, InventoryItem};
