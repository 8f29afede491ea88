use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum AclError {
    #[error("expected 3 '|'-separated fields, found {found} in '{descriptor}'")]
    WrongFieldCount { descriptor: String, found: usize },

    #[error("empty {field} field in '{descriptor}'")]
    EmptyField {
        descriptor: String,
        field: String,
    },

    #[error("permissions must be 1 to 5 characters, found {0}")]
    InvalidPermissionLength(usize),

    #[error("unknown permission '{0}' (expected one of r, w, c, d, a)")]
    UnknownPermission(char),

    #[error("permission mask {0} is empty or has bits outside 0..=31")]
    InvalidPermissionBits(i32),

    #[error("{field} field must not contain '{character}'")]
    ReservedCharacter { field: String, character: char },
}
