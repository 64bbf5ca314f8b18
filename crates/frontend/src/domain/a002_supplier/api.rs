use contracts::domain::a002_supplier::{Supplier, SupplierDto};
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok, read_collection, read_record};

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    let response = Request::get(&api_url(&Supplier::collection_path()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_collection(response, Supplier::collection_name()).await
}

pub async fn fetch_supplier(id: &str) -> Result<Supplier, String> {
    let response = Request::get(&api_url(&Supplier::record_path(id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_record(response, Supplier::element_name()).await
}

pub async fn create_supplier(dto: &SupplierDto) -> Result<(), String> {
    let response = Request::post(&api_url(&Supplier::collection_path()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(&response, "create supplier")
}

pub async fn update_supplier(id: &str, dto: &SupplierDto) -> Result<(), String> {
    let response = Request::put(&api_url(&Supplier::record_path(id)))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(&response, "update supplier")
}

pub async fn delete_supplier(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&Supplier::record_path(id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(&response, "delete supplier")
}
