use serde::{Deserialize, Serialize};

use crate::domain::a003_inventory_item::{find_item_name, InventoryItem};
use crate::domain::common::lenient::{optional_string_or_number, string_or_number};
use crate::domain::common::AggregateRoot;
use crate::shared::report::Reportable;
use crate::shared::search::Searchable;
use crate::shared::validation::{self, FieldError};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Поставщик. `item_no`/`item_name` are a copy of the inventory item taken
/// when the supplier was saved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(rename = "SupplierID", default, deserialize_with = "string_or_number")]
    pub supplier_id: String,

    #[serde(rename = "SupplierName", default, deserialize_with = "string_or_number")]
    pub supplier_name: String,

    #[serde(rename = "ItemNo", default, deserialize_with = "string_or_number")]
    pub item_no: String,

    #[serde(rename = "ItemName", default, deserialize_with = "string_or_number")]
    pub item_name: String,

    #[serde(rename = "ContactNo", default, deserialize_with = "string_or_number")]
    pub contact_no: String,

    #[serde(rename = "Email", default, deserialize_with = "string_or_number")]
    pub email: String,

    #[serde(rename = "Address", default, deserialize_with = "string_or_number")]
    pub address: String,
}

impl AggregateRoot for Supplier {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn entity_key() -> &'static str {
        "supplier"
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }
}

impl Searchable for Supplier {
    fn search_values(&self) -> Vec<String> {
        vec![
            self.id.clone().unwrap_or_default(),
            self.supplier_id.clone(),
            self.supplier_name.clone(),
            self.item_no.clone(),
            self.item_name.clone(),
            self.contact_no.clone(),
            self.email.clone(),
            self.address.clone(),
        ]
    }
}

impl Reportable for Supplier {
    fn report_entity() -> &'static str {
        "Supplier"
    }

    fn report_columns() -> &'static [&'static str] {
        &[
            "Supplier ID",
            "Supplier Name",
            "Item No",
            "Item Name",
            "Contact No",
            "Email",
            "Address",
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.supplier_id.clone(),
            self.supplier_name.clone(),
            self.item_no.clone(),
            self.item_name.clone(),
            self.contact_no.clone(),
            self.email.clone(),
            self.address.clone(),
        ]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for `POST /suppliers` and `PUT /suppliers/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDto {
    #[serde(rename = "SupplierName")]
    pub supplier_name: String,

    #[serde(rename = "ItemNo")]
    pub item_no: String,

    #[serde(rename = "ItemName")]
    pub item_name: String,

    #[serde(rename = "ContactNo")]
    pub contact_no: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Address")]
    pub address: String,
}

/// Raw text of the supplier form, as typed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SupplierForm {
    pub supplier_name: String,
    pub item_no: String,
    /// Read-only in the UI, follows `item_no`
    pub item_name: String,
    pub contact_no: String,
    pub email: String,
    pub address: String,
}

impl SupplierForm {
    pub fn from_record(supplier: &Supplier) -> Self {
        Self {
            supplier_name: supplier.supplier_name.clone(),
            item_no: supplier.item_no.clone(),
            item_name: supplier.item_name.clone(),
            contact_no: supplier.contact_no.clone(),
            email: supplier.email.clone(),
            address: supplier.address.clone(),
        }
    }

    /// Picks an inventory item; the item name is copied from the matching
    /// item or cleared when none matches.
    pub fn select_item(&mut self, items: &[InventoryItem], item_no: &str) {
        self.item_no = item_no.to_string();
        self.item_name = find_item_name(items, item_no);
    }

    /// Validates in form order and builds the request payload.
    pub fn validate(&self) -> Result<SupplierDto, FieldError> {
        validation::require("Supplier Name", &self.supplier_name)?;
        validation::require("Item No", &self.item_no)?;
        validation::validate_contact_no(&self.contact_no)?;
        validation::validate_email(&self.email)?;
        validation::require("Address", &self.address)?;

        Ok(SupplierDto {
            supplier_name: self.supplier_name.clone(),
            item_no: self.item_no.clone(),
            item_name: self.item_name.clone(),
            contact_no: self.contact_no.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::envelope::decode_collection;
    use crate::shared::report::ReportTable;
    use crate::shared::search::filter_records;

    fn valid_form() -> SupplierForm {
        SupplierForm {
            supplier_name: "Glow Supplies".into(),
            item_no: "I-01".into(),
            item_name: "Shampoo".into(),
            contact_no: "0771234567".into(),
            email: "orders@glowsupplies.lk".into(),
            address: "12 Main St, Gampaha".into(),
        }
    }

    #[test]
    fn test_short_contact_no_blocks_submission() {
        let form = SupplierForm { contact_no: "12345".into(), ..valid_form() };
        let err = form.validate().unwrap_err();
        assert_eq!(err, FieldError::InvalidContactNo);
        assert_eq!(err.to_string(), "Contact No must be a valid 10-digit number!");
    }

    #[test]
    fn test_validation_order() {
        let cases = [
            (SupplierForm::default(), "Supplier Name is required!"),
            (SupplierForm { item_no: "".into(), ..valid_form() }, "Item No is required!"),
            (SupplierForm { contact_no: "".into(), ..valid_form() }, "Contact No is required!"),
            (SupplierForm { email: "".into(), ..valid_form() }, "Email is required!"),
            (
                SupplierForm { email: "orders@glow".into(), ..valid_form() },
                "Email must be a valid email address!",
            ),
            (SupplierForm { address: "  ".into(), ..valid_form() }, "Address is required!"),
        ];
        for (form, message) in cases {
            assert_eq!(form.validate().unwrap_err().to_string(), message);
        }
    }

    #[test]
    fn test_valid_form_payload() {
        let dto = valid_form().validate().unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["SupplierName"], "Glow Supplies");
        assert_eq!(json["ItemName"], "Shampoo");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_select_item_copies_name() {
        let items = vec![
            InventoryItem { item_no: "I-01".into(), item_name: "Shampoo".into(), ..Default::default() },
            InventoryItem { item_no: "I-02".into(), item_name: "Conditioner".into(), ..Default::default() },
        ];
        let mut form = SupplierForm::default();
        form.select_item(&items, "I-02");
        assert_eq!(form.item_name, "Conditioner");
        form.select_item(&items, "I-99");
        assert_eq!(form.item_no, "I-99");
        assert_eq!(form.item_name, "");
    }

    #[test]
    fn test_list_scenario_numeric_id_and_no_match() {
        let body = r#"{"data":[{"_id":"66a1","SupplierID":1,"SupplierName":"Glow Supplies","ItemNo":"I-01","ItemName":"Shampoo","ContactNo":"0771234567","Email":"orders@glowsupplies.lk","Address":"Gampaha"}]}"#;
        let suppliers = decode_collection::<Supplier>(body).unwrap().into_records();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].supplier_id, "1");

        assert_eq!(filter_records(&suppliers, "").len(), 1);
        assert_eq!(filter_records(&suppliers, "GLOW").len(), 1);
        assert!(filter_records(&suppliers, "xyz").is_empty());
    }

    #[test]
    fn test_report_table_columns() {
        let suppliers = vec![Supplier { supplier_name: "Glow".into(), ..Default::default() }];
        let table = ReportTable::from_records(&suppliers).unwrap();
        assert_eq!(
            table.columns(),
            &["No", "Supplier ID", "Supplier Name", "Item No", "Item Name", "Contact No", "Email", "Address"]
        );
        assert_eq!(table.rows()[0][2], "Glow");
    }
}
