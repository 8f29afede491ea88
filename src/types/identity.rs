//! Authentication identities presented when a session connects.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A `scheme` plus the raw `auth` bytes sent in the authentication handshake.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Identity {
    scheme: String,
    auth: Vec<u8>,
}

impl Identity {
    pub fn new(scheme: impl Into<String>, auth: impl Into<Vec<u8>>) -> Self {
        Identity {
            scheme: scheme.into(),
            auth: auth.into(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn auth(&self) -> &[u8] {
        &self.auth
    }
}

// The auth payload is usually a secret, keep it out of logs.
impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:<{} bytes>", self.scheme, self.auth.len())
    }
}
