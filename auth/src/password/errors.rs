use thiserror::Error;

/// Error type for password operations.
///
/// Messages never include the plaintext password. A wrong password on verify
/// is not an error; these variants cover primitive and encoding failures.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Could not compute password hash: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is not a valid PHC string: {0}")]
    BadStoredHash(String),
}
