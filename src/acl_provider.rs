use tracing::debug;

use crate::config::AclConfig;
use crate::parser::{ParsedEntries, RejectedDescriptor, parse_with_diagnostics};
use crate::traits::AclProvider;
use crate::types::AccessEntry;

/// ACL lists read once from the `SOLR_ZK_*_ACLS` configuration.
///
/// Each list keeps the permissions written in its descriptors, the slot only
/// decides which nodes the list is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVarAclProvider {
    security: Vec<AccessEntry>,
    non_security: Vec<AccessEntry>,
    rejected: Vec<RejectedDescriptor>,
}

impl EnvVarAclProvider {
    pub fn new(security: Option<&str>, non_security: Option<&str>) -> Self {
        let ParsedEntries {
            entries: security,
            mut rejected,
        } = parse_with_diagnostics(security);
        let non_security = parse_with_diagnostics(non_security);
        rejected.extend(non_security.rejected);

        debug!(
            event = "AclProvider",
            phase = "Loaded",
            security = security.len(),
            non_security = non_security.entries.len(),
            rejected = rejected.len()
        );

        EnvVarAclProvider {
            security,
            non_security: non_security.entries,
            rejected,
        }
    }

    pub fn from_config(config: &AclConfig) -> Self {
        Self::new(config.security(), config.non_security())
    }

    pub fn from_env() -> Self {
        Self::from_config(&AclConfig::from_env())
    }

    /// Descriptors dropped from either slot, security slot first.
    pub fn rejected(&self) -> &[RejectedDescriptor] {
        &self.rejected
    }
}

impl AclProvider for EnvVarAclProvider {
    fn security_acls(&self) -> &[AccessEntry] {
        &self.security
    }

    fn non_security_acls(&self) -> &[AccessEntry] {
        &self.non_security
    }
}
