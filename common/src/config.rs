use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result};
use hocon::{Hocon, HoconLoader};
use log::debug;

use crate::env::env_vars;

/// Reads options from a HOCON file.
///
/// Lookups check, in order: an environment variable with the exact key name, the key inside the
/// loader's scope block, then the key at the top level of the file.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            anyhow::bail!("The config file {:?} was not found", path);
        }

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()
            .with_context(|| format!("Failed to parse config file at: {:?}", path))?;

        debug!("Loaded config {:?} with scope {}", path, scope);

        Ok(Self {
            hocon,
            env: env_vars(),
            scope,
        })
    }

    /// Loads the file when present, otherwise every lookup falls through to defaults and the
    /// environment.
    pub fn new_or_default(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            return Self::new(path, scope);
        }

        debug!("No config file at {:?}, using defaults", path);

        Ok(Self::with_hocon(
            Hocon::Hash(Default::default()),
            env_vars(),
            scope,
        ))
    }

    pub fn from_contents(contents: &str, scope: String) -> Result<Self> {
        let hocon = HoconLoader::new()
            .load_str(contents)
            .context("Failed to read config")?
            .hocon()
            .context("Failed to parse config")?;

        Ok(Self::with_hocon(hocon, HashMap::new(), scope))
    }

    /// Replaces the environment used for overrides.
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// The same file viewed from a different scope block.
    pub fn scoped(&self, scope: &str) -> Self {
        Self {
            hocon: self.hocon.clone(),
            env: self.env.clone(),
            scope: scope.to_string(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(name) {
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        let res = T::load(self)?;
        Ok(res)
    }

    fn with_hocon(hocon: Hocon, env: HashMap<String, String>, scope: String) -> Self {
        Self { hocon, env, scope }
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        Self::map_value(&hocon[name])
    }

    fn map_value(hocon: &Hocon) -> Option<Value> {
        match hocon {
            Hocon::Real(f64) => Some(Value::Float(*f64 as f32)),
            Hocon::Integer(i64) => Some(Value::Integer(*i64 as usize)),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(bool) => Some(Value::Boolean(*bool)),
            Hocon::Array(items) => Some(Value::List(
                items.iter().filter_map(Self::map_value).collect(),
            )),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(usize),
    Float(f32),
    Boolean(bool),
    List(Vec<Value>),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(val) => Some(*val),
            Value::String(val) => Hocon::String(val.clone()).as_bool(),
            _ => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => Some(*val),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(val) => Some(val.clone()),
            Value::Boolean(true) => Some("true".to_string()),
            Value::Boolean(false) => Some("false".to_string()),
            Value::Float(val) => Some(val.to_string()),
            Value::Integer(val) => Some(val.to_string()),
            Value::List(_) => None,
        }
    }

    /// Lists map element-wise. A string is split on commas so list options can be overridden
    /// from a single environment variable.
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        match self {
            Value::List(items) => items.iter().map(Value::as_string).collect(),
            Value::String(val) => Some(
                val.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => None,
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}
