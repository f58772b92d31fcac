use anyhow::Result;
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionOptions {
    /// Advanced mode can only be switched on once both seed names are filled in.
    pub require_seeds_for_advanced: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            require_seeds_for_advanced: true,
        }
    }
}

impl Config for SessionOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            require_seeds_for_advanced: config
                .get("require_seeds_for_advanced")
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.require_seeds_for_advanced),
        })
    }
}
