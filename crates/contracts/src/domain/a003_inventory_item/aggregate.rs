use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{optional_string_or_number, string_or_number};
use crate::domain::common::AggregateRoot;

/// Позиция склада. Owned by the inventory service; the admin panel only
/// reads it to fill the supplier item picker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(rename = "ItemNo", default, deserialize_with = "string_or_number")]
    pub item_no: String,

    #[serde(rename = "ItemName", default, deserialize_with = "string_or_number")]
    pub item_name: String,
}

impl AggregateRoot for InventoryItem {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn entity_key() -> &'static str {
        "inventory_item"
    }

    fn collection_name() -> &'static str {
        "inventories"
    }

    fn element_name() -> &'static str {
        "Inventory Item"
    }

    fn list_name() -> &'static str {
        "Inventory"
    }
}

/// Name of the item with number `item_no`, empty when there is none.
pub fn find_item_name(items: &[InventoryItem], item_no: &str) -> String {
    items
        .iter()
        .find(|item| item.item_no == item_no)
        .map(|item| item.item_name.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::decode_collection;

    #[test]
    fn test_decode_and_lookup() {
        let body = r#"{"data":[{"_id":"a","ItemNo":"I-01","ItemName":"Shampoo","Quantity":4},{"_id":"b","ItemNo":2,"ItemName":"Hair dye"}]}"#;
        let items = decode_collection::<InventoryItem>(body).unwrap().into_records();
        assert_eq!(items.len(), 2);
        assert_eq!(find_item_name(&items, "I-01"), "Shampoo");
        assert_eq!(find_item_name(&items, "2"), "Hair dye");
        assert_eq!(find_item_name(&items, "missing"), "");
    }
}
