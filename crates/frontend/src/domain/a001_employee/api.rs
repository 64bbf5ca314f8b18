use contracts::domain::a001_employee::{Employee, EmployeeDto};
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok, read_collection, read_record};

/// Fetch all employees
pub async fn fetch_employees() -> Result<Vec<Employee>, String> {
    let response = Request::get(&api_url(&Employee::collection_path()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_collection(response, Employee::collection_name()).await
}

/// Fetch one employee by backend id
pub async fn fetch_employee(id: &str) -> Result<Employee, String> {
    let response = Request::get(&api_url(&Employee::record_path(id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_record(response, Employee::element_name()).await
}

/// Create new employee
pub async fn create_employee(dto: &EmployeeDto) -> Result<(), String> {
    let response = Request::post(&api_url(&Employee::collection_path()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(&response, "create employee")
}

/// Update employee
pub async fn update_employee(id: &str, dto: &EmployeeDto) -> Result<(), String> {
    let response = Request::put(&api_url(&Employee::record_path(id)))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(&response, "update employee")
}

/// Delete employee
pub async fn delete_employee(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&Employee::record_path(id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(&response, "delete employee")
}
