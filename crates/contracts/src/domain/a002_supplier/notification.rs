use crate::shared::mailto::MailDraft;

/// Draft asking a supplier to restock items that are running low.
pub fn low_item_quantity(supplier_email: &str) -> MailDraft {
    MailDraft::new(
        supplier_email,
        "Urgent: Low Item Quantity Alert",
        "Dear Supplier Manager,\n\nWe have identified that the quantity of one or more items is running low. We kindly request that you arrange for new supplies at your earliest convenience.\n\nBest regards,\nYour Company",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_item_quantity_uri() {
        let uri = low_item_quantity("orders@glowsupplies.lk").to_mailto_uri();
        assert!(uri.starts_with(
            "mailto:orders%40glowsupplies.lk?subject=Urgent%3A%20Low%20Item%20Quantity%20Alert&body=Dear%20Supplier%20Manager"
        ));
        assert!(!uri.contains(' '));
        assert!(!uri.contains('\n'));
    }
}
