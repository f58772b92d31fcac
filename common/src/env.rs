use std::collections::HashMap;
use std::ffi::OsString;

/// First set value among the listed variables.
pub fn get_env_any(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| std::env::var(key).ok())
}

/// The process environment. Variables whose name or value is not valid unicode are skipped.
pub fn env_vars() -> HashMap<String, String> {
    unicode_vars(std::env::vars_os())
}

fn unicode_vars(vars: impl Iterator<Item = (OsString, OsString)>) -> HashMap<String, String> {
    vars.filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
