use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Privilege level carried in access tokens and user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for role parsing failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid role {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

/// Authenticated identity resolved from a verified token.
///
/// Lives for a single request. The embedded role is the one the user had when
/// the token was issued; a later role change only takes effect at re-login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub role: Role,
}

impl Principal {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }
}

/// Authorization failures raised by [`require_admin`].
///
/// Both variants map to 401 at the HTTP layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Principal has no identity")]
    MissingIdentity,

    #[error("Principal lacks the admin role")]
    InsufficientPrivilege,
}

/// Reject principals lacking the admin role.
///
/// Privileged handlers call this before touching storage and short-circuit on
/// failure. An empty username is treated as no identity at all.
pub fn require_admin(principal: &Principal) -> Result<(), AccessError> {
    if principal.username.is_empty() {
        return Err(AccessError::MissingIdentity);
    }

    if principal.role != Role::Admin {
        return Err(AccessError::InsufficientPrivilege);
    }

    Ok(())
}
