use contracts::domain::a003_inventory_item::InventoryItem;
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_collection};

/// Fetch the inventory items offered by the supplier form
pub async fn fetch_inventory_items() -> Result<Vec<InventoryItem>, String> {
    let response = Request::get(&api_url(&InventoryItem::collection_path()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_collection(response, InventoryItem::collection_name()).await
}
