use itertools::Itertools;
use tracing::debug;

use crate::config::AclConfig;
use crate::parser::parse;
use crate::traits::CredentialsProvider;
use crate::types::{AccessEntry, Identity};

/// Authentication identities taken from both ACL configuration slots.
///
/// Permissions are ignored; an identity listed in both slots, or with
/// different permissions, is presented once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVarCredentialsProvider {
    credentials: Vec<Identity>,
}

impl EnvVarCredentialsProvider {
    pub fn new(security: Option<&str>, non_security: Option<&str>) -> Self {
        let credentials: Vec<Identity> = parse(security)
            .into_iter()
            .chain(parse(non_security))
            .map(AccessEntry::into_identity)
            .unique()
            .collect();

        debug!(
            event = "CredentialsProvider",
            phase = "Loaded",
            credentials = credentials.len()
        );

        EnvVarCredentialsProvider { credentials }
    }

    pub fn from_config(config: &AclConfig) -> Self {
        Self::new(config.security(), config.non_security())
    }

    pub fn from_env() -> Self {
        Self::from_config(&AclConfig::from_env())
    }
}

impl CredentialsProvider for EnvVarCredentialsProvider {
    fn credentials(&self) -> &[Identity] {
        &self.credentials
    }
}
