pub use acl_provider::EnvVarAclProvider;
pub use config::{AclConfig, NON_SECURITY_ACLS_VAR, SECURITY_ACLS_VAR};
pub use credentials_provider::EnvVarCredentialsProvider;
pub use error::AclError;
pub use parser::{ParsedEntries, RejectedDescriptor, parse, parse_with_diagnostics};
pub use traits::{AclProvider, CredentialsProvider};
pub use types::{AccessEntry, Identity, Permission, Permissions};

mod acl_provider;
mod config;
mod credentials_provider;
mod error;
mod parser;
mod traits;
pub mod types;

#[cfg(test)]
mod tests;
