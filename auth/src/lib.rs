//! Authentication and authorization building blocks shared by the services.
//!
//! Provides:
//! - Password hashing (Argon2id)
//! - Issuing and verifying signed access tokens (HS256)
//! - The [`Principal`] identity resolved from a verified token
//! - An axum middleware ([`gate::authenticate`]) that guards protected routes
//! - The admin role guard ([`require_admin`]) for privileged handlers
//!
//! Each service wires these into its own router; the middleware only needs a
//! shared [`TokenService`] so both services verify tokens the same way.
//!
//! # Examples
//!
//! ```
//! use auth::{PasswordHasher, Principal, Role, TokenService};
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("hunter2").unwrap();
//! assert!(hasher.verify("hunter2", &hash).unwrap());
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let principal = Principal::new("alice", Role::User);
//! let token = tokens.issue(&principal).unwrap();
//! assert_eq!(tokens.verify(&token).unwrap(), principal);
//! ```

pub mod gate;
pub mod password;
pub mod principal;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use principal::require_admin;
pub use principal::AccessError;
pub use principal::Principal;
pub use principal::Role;
pub use token::TokenError;
pub use token::TokenService;
