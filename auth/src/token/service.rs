use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;
use crate::principal::Principal;

/// How long an issued token stays valid.
const TOKEN_VALIDITY_SECS: i64 = 3600;

/// Issues and verifies signed access tokens.
///
/// Signs with a symmetric secret using HS256. The algorithm is pinned on both
/// sides: a token whose header claims a different algorithm fails verification
/// regardless of its signature.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a token service from the process-wide signing secret.
    ///
    /// The secret comes from configuration at startup and should be at least
    /// 256 bits. Rotating it invalidates every outstanding token.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a principal, valid for one hour.
    ///
    /// # Errors
    /// * `SigningFailed` - claim serialization or signing failed
    pub fn issue(&self, principal: &Principal) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = AccessClaims::new(
            principal,
            now.timestamp(),
            (now + Duration::seconds(TOKEN_VALIDITY_SECS)).timestamp(),
        );

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and rebuild the principal it was issued for.
    ///
    /// # Errors
    /// * `Expired` - the embedded expiry lies in the past (no leeway)
    /// * `Unverifiable` - signature mismatch or unexpected algorithm
    /// * `Malformed` - claims cannot be decoded into [`AccessClaims`]
    pub fn verify(&self, token: &str) -> Result<Principal, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidAlgorithmName => TokenError::Unverifiable,
                _ => TokenError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims.to_principal())
    }
}
