use crate::types::{AccessEntry, Identity};

/// Supplies the ACLs a ZooKeeper client attaches when it creates nodes.
pub trait AclProvider: Send + Sync {
    /// Entries for privileged paths (security configuration and the like).
    fn security_acls(&self) -> &[AccessEntry];

    /// Entries for every other path.
    fn non_security_acls(&self) -> &[AccessEntry];

    /// Both lists, security first. Entries present in both are repeated.
    fn all_acls(&self) -> Vec<AccessEntry> {
        self.security_acls()
            .iter()
            .chain(self.non_security_acls())
            .cloned()
            .collect()
    }
}

/// Supplies the identities a ZooKeeper client authenticates with.
pub trait CredentialsProvider: Send + Sync {
    fn credentials(&self) -> &[Identity];
}
