use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;
use log::warn;

/// Feature levels granted by the access provider. `All` implies every other level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Basic,
    Advanced,
    All,
}

impl FromStr for Permission {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Permission::Basic),
            "advanced" => Ok(Permission::Advanced),
            "all" => Ok(Permission::All),
            _ => Err(anyhow!("Permission {:?} is unknown", s)),
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Permission::Basic => write!(f, "basic"),
            Permission::Advanced => write!(f, "advanced"),
            Permission::All => write!(f, "all"),
        }
    }
}

/// Whoever decides if the person at the console may use a feature. The prediction rules never
/// consult it; only the console does before dispatching a command.
pub trait AccessProvider {
    fn is_authenticated(&self) -> bool;

    fn has_permission(&self, permission: Permission) -> bool;

    fn on_login_required(&self);
}

/// A fixed grant read from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAccess {
    authenticated: bool,
    permissions: Vec<Permission>,
}

impl StaticAccess {
    pub fn new(authenticated: bool, permissions: Vec<Permission>) -> Self {
        Self {
            authenticated,
            permissions,
        }
    }
}

impl AccessProvider for StaticAccess {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn has_permission(&self, permission: Permission) -> bool {
        self.permissions
            .iter()
            .any(|p| *p == permission || *p == Permission::All)
    }

    fn on_login_required(&self) {
        warn!("Login required before using the predictor");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_grants_everything() {
        let access = StaticAccess::new(true, vec![Permission::All]);

        assert!(access.has_permission(Permission::Basic));
        assert!(access.has_permission(Permission::Advanced));
    }

    #[test]
    fn test_basic_does_not_grant_advanced() {
        let access = StaticAccess::new(true, vec![Permission::Basic]);

        assert!(access.has_permission(Permission::Basic));
        assert!(!access.has_permission(Permission::Advanced));
    }

    #[test]
    fn test_parse_permission() {
        assert_eq!("ALL".parse::<Permission>().unwrap(), Permission::All);
        assert_eq!(" basic ".parse::<Permission>().unwrap(), Permission::Basic);
        assert!("admin".parse::<Permission>().is_err());
    }
}
