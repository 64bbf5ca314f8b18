//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and decoding the
//! backend's response envelopes.

use super::config::use_config;
use contracts::shared::envelope::{self, Collection};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Get the base URL for API requests
///
/// Taken from the [`AppConfig`](super::config::AppConfig) provided by the
/// app: the current window host on the backend port 8076 unless overridden in
/// `localStorage`.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/suppliers/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    use_config().api_base
}

/// Build a full API URL from a path starting with `/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Reads a `{ "data": [...] }` response. A non-array payload is logged and
/// yields an empty list.
pub async fn read_collection<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<Vec<T>, String> {
    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", what, response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    match envelope::decode_collection::<T>(&body)
        .map_err(|e| format!("Failed to parse {}: {}", what, e))?
    {
        Collection::Records(records) => Ok(records),
        Collection::UnexpectedShape(payload) => {
            log::warn!("Unexpected {} payload, expected an array: {}", what, payload);
            Ok(Vec::new())
        }
    }
}

/// Reads a single record, bare or wrapped in `{ "data": {...} }`.
pub async fn read_record<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, String> {
    if response.status() == 404 {
        return Err(format!("{} not found", what));
    }
    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", what, response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    envelope::decode_record(&body).map_err(|e| format!("Failed to parse {}: {}", what, e))
}

/// Fails on any non-2xx status.
pub fn ensure_ok(response: &Response, action: &str) -> Result<(), String> {
    if !response.ok() {
        return Err(format!("Failed to {}: {}", action, response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;
    use leptos::prelude::{provide_context, Owner};

    #[test]
    fn test_api_url_uses_provided_config() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(AppConfig {
                api_base: "http://10.0.0.5:9000".to_string(),
                ..AppConfig::default()
            });
            assert_eq!(api_url("/employees"), "http://10.0.0.5:9000/employees");
            assert_eq!(api_url("/suppliers/7"), "http://10.0.0.5:9000/suppliers/7");
        });
    }
}
