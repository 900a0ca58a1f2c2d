use serde::Deserialize;
use serde::Serialize;

use crate::principal::Principal;
use crate::principal::Role;

/// Claim set embedded in access tokens.
///
/// Strongly typed: a token with a missing or wrong-typed field fails
/// deserialization at verify time instead of faulting later on a claim
/// lookup. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject, the authenticated username
    pub sub: String,

    /// Role held at issuance time
    pub role: Role,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl AccessClaims {
    /// Build the claim set for a principal with an absolute expiry.
    pub fn new(principal: &Principal, issued_at: i64, expires_at: i64) -> Self {
        Self {
            sub: principal.username.clone(),
            role: principal.role,
            exp: expires_at,
            iat: issued_at,
        }
    }

    /// Rebuild the principal these claims were issued for.
    pub fn to_principal(&self) -> Principal {
        Principal::new(self.sub.clone(), self.role)
    }
}
