//! Настройки приложения
//!
//! Defaults are compiled in. A JSON object stored in `localStorage` under
//! [`STORAGE_KEY`] overrides individual fields, e.g.
//! `{"api_base": "https://salon.example.com:8076"}`.

use contracts::domain::a001_employee::notification::DEFAULT_MANAGER_EMAIL;
use contracts::shared::report::{REPORT_ADDRESS, REPORT_TITLE};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "salon_admin_config";

/// Port the salon REST backend listens on
pub const BACKEND_PORT: u16 = 8076;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_base: String,
    /// Report title
    pub company_name: String,
    /// Address line under the report date
    pub company_address: String,
    pub employee_manager_email: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_host("http:", "localhost")
    }
}

impl AppConfig {
    /// Defaults for a page served from `protocol//hostname`.
    pub fn for_host(protocol: &str, hostname: &str) -> Self {
        Self {
            api_base: format!("{}//{}:{}", protocol, hostname, BACKEND_PORT),
            company_name: REPORT_TITLE.to_string(),
            company_address: REPORT_ADDRESS.to_string(),
            employee_manager_email: DEFAULT_MANAGER_EMAIL.to_string(),
        }
    }

    /// Applies a JSON override on top of `self`. Fields missing from the
    /// override keep their current value.
    pub fn with_overrides(self, json: &str) -> Result<Self, String> {
        let overrides: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| format!("Invalid config override: {}", e))?;

        let mut merged = serde_json::to_value(&self).map_err(|e| format!("{e}"))?;
        if let serde_json::Value::Object(fields) = &mut merged {
            for (key, value) in overrides {
                if fields.contains_key(&key) {
                    fields.insert(key, value);
                }
            }
        }
        let mut config: AppConfig =
            serde_json::from_value(merged).map_err(|e| format!("Invalid config override: {}", e))?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Defaults for the current window location plus the stored override.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "localhost".to_string());
        let defaults = Self::for_host(&protocol, &hostname);

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

        match stored {
            Some(json) => match defaults.clone().with_overrides(&json) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("{}; using defaults", e);
                    defaults
                }
            },
            None => defaults,
        }
    }
}

/// Config provided by `App`, falling back to a fresh load outside the tree.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_page_host() {
        let config = AppConfig::for_host("https:", "salon.local");
        assert_eq!(config.api_base, "https://salon.local:8076");
        assert_eq!(config.company_name, "Saloon Management");
        assert_eq!(config.company_address, "Saloon, Gampaha");
        assert_eq!(config.employee_manager_email, "employeeManager@gmail.com");
    }

    #[test]
    fn test_override_replaces_only_given_fields() {
        let config = AppConfig::for_host("http:", "localhost")
            .with_overrides(r#"{"api_base": "http://10.0.0.5:9000/", "unknown": 1}"#)
            .unwrap();
        assert_eq!(config.api_base, "http://10.0.0.5:9000");
        assert_eq!(config.company_name, "Saloon Management");
    }

    #[test]
    fn test_bad_override_is_rejected() {
        assert!(AppConfig::default().with_overrides("not json").is_err());
        assert!(AppConfig::default().with_overrides("[1, 2]").is_err());
    }
}
