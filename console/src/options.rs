use anyhow::{Context, Result};
use common::{Config, ConfigLoader};

use crate::{Permission, StaticAccess};

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleOptions {
    /// Shown in place of speculative rounds the scenario cannot predict.
    pub unknown_label: String,
    pub authenticated: bool,
    pub permissions: Vec<Permission>,
    pub pretty_json: bool,
}

impl ConsoleOptions {
    pub fn access(&self) -> StaticAccess {
        StaticAccess::new(self.authenticated, self.permissions.clone())
    }
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            unknown_label: "UNKNOWN".to_string(),
            authenticated: true,
            permissions: vec![Permission::Basic, Permission::Advanced],
            pretty_json: true,
        }
    }
}

impl Config for ConsoleOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        let permissions = match config.get("permissions").and_then(|v| v.as_string_list()) {
            Some(names) => names
                .iter()
                .map(|name| name.parse::<Permission>())
                .collect::<Result<Vec<_>>>()
                .context("Failed to read permissions")?,
            None => defaults.permissions,
        };

        Ok(Self {
            unknown_label: config
                .get("unknown_label")
                .and_then(|v| v.as_string())
                .unwrap_or(defaults.unknown_label),
            authenticated: config
                .get("authenticated")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.authenticated),
            permissions,
            pretty_json: config
                .get("pretty_json")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.pretty_json),
        })
    }
}
