use serde::Serialize;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Location and credentials of the remote content store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: Option<String>,
    pub entry_type: String,
}

/// Store configuration safe to echo back to a client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedStoreConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub entry_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<&'static str>,
}

impl StoreConfig {
    pub fn redacted(&self) -> RedactedStoreConfig {
        RedactedStoreConfig {
            project_id: self.project_id.clone(),
            dataset: self.dataset.clone(),
            api_version: self.api_version.clone(),
            entry_type: self.entry_type.clone(),
            token: self.token.as_ref().map(|_| "[REDACTED]"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestLogMode {
    #[default]
    Auto,
    Memory,
    Remote,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub templates_glob: String,
    pub static_dir: String,
    pub request_log: RequestLogMode,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Malformed values are
    /// logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let bind_addr = match get("BIND_ADDR").map(|raw| raw.parse::<SocketAddr>()) {
            Some(Ok(addr)) => addr,
            Some(Err(e)) => {
                log::warn!("Invalid BIND_ADDR ({}), using {}", e, DEFAULT_BIND_ADDR);
                default_bind_addr()
            }
            None => default_bind_addr(),
        };

        let request_log = match get("REQUEST_LOG").as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("auto") => RequestLogMode::Auto,
            Some("memory") => RequestLogMode::Memory,
            Some("remote") => RequestLogMode::Remote,
            Some(other) => {
                log::warn!("Unknown REQUEST_LOG value '{}', using auto", other);
                RequestLogMode::Auto
            }
        };

        Self {
            bind_addr,
            templates_glob: or("TEMPLATES_GLOB", "templates/**/*.html"),
            static_dir: or("STATIC_DIR", "static"),
            request_log,
            store: StoreConfig {
                project_id: or("SANITY_PROJECT_ID", ""),
                dataset: or("SANITY_DATASET", "production"),
                api_version: or("SANITY_API_VERSION", "2023-05-03"),
                token: get("SANITY_TOKEN"),
                entry_type: or("SANITY_ENTRY_TYPE", "word"),
            },
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config(&[]);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.request_log, RequestLogMode::Auto);
        assert_eq!(config.store.project_id, "");
        assert_eq!(config.store.dataset, "production");
        assert_eq!(config.store.api_version, "2023-05-03");
        assert_eq!(config.store.entry_type, "word");
        assert!(config.store.token.is_none());
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let config = config(&[
            ("BIND_ADDR", "not-an-address"),
            ("REQUEST_LOG", "carrier-pigeon"),
            ("SANITY_TOKEN", "   "),
        ]);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.request_log, RequestLogMode::Auto);
        assert!(config.store.token.is_none());
    }

    #[test]
    fn reads_store_settings() {
        let config = config(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_TOKEN", "sk-secret"),
            ("REQUEST_LOG", "Memory"),
            ("BIND_ADDR", "0.0.0.0:8080"),
        ]);
        assert_eq!(config.store.project_id, "abc123");
        assert_eq!(config.request_log, RequestLogMode::Memory);
        assert_eq!(config.bind_addr.port(), 8080);

        let redacted = serde_json::to_value(config.store.redacted()).unwrap();
        assert_eq!(redacted["token"], "[REDACTED]");
        assert_eq!(redacted["projectId"], "abc123");
    }
}
