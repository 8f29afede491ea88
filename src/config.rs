use std::env::{self, VarError};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable holding the full-control ACLs.
pub const SECURITY_ACLS_VAR: &str = "SOLR_ZK_SECURITY_ACLS";

/// Environment variable holding the ACLs for general-purpose nodes.
pub const NON_SECURITY_ACLS_VAR: &str = "SOLR_ZK_NON_SECURITY_ACLS";

/// The two raw ACL configuration slots, before parsing.
///
/// A missing slot and an empty one mean the same thing: no entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AclConfig {
    pub security: Option<String>,
    pub non_security: Option<String>,
}

impl AclConfig {
    pub fn new(security: Option<&str>, non_security: Option<&str>) -> Self {
        AclConfig {
            security: security.map(str::to_string),
            non_security: non_security.map(str::to_string),
        }
    }

    /// Read both slots from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(
                    event = "AclConfig",
                    phase = "Env",
                    variable = key,
                    "Ignoring environment variable that is not valid unicode"
                );
                None
            }
        })
    }

    /// Read both slots through `lookup`, keyed by the environment variable names.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        AclConfig {
            security: lookup(SECURITY_ACLS_VAR),
            non_security: lookup(NON_SECURITY_ACLS_VAR),
        }
    }

    pub fn security(&self) -> Option<&str> {
        self.security.as_deref()
    }

    pub fn non_security(&self) -> Option<&str> {
        self.non_security.as_deref()
    }
}
