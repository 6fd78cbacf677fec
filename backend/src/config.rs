//! Server settings. Defaults match a local desktop session; each value can be
//! overridden through the environment.

use log::warn;
use std::env;
use std::str::FromStr;

pub const HOST_VAR: &str = "TAX_RULES_HOST";
pub const PORT_VAR: &str = "TAX_RULES_PORT";
pub const OPEN_BROWSER_VAR: &str = "TAX_RULES_OPEN_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the form in the default browser once the server is up.
    pub open_browser: bool,
    /// Maximum accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
            json_limit: 10 * 1024 * 1024, // 10 MB
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup(HOST_VAR)
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, PORT_VAR, defaults.port),
            open_browser: parse_or(&lookup, OPEN_BROWSER_VAR, defaults.open_browser),
            json_limit: defaults.json_limit,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T {
    match lookup(name) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}", name, raw);
            default
        }),
        None => default,
    }
}
