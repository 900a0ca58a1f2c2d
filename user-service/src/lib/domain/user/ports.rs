use async_trait::async_trait;
use auth::Role;

use crate::user::errors::QueueError;
use crate::user::errors::UserError;
use crate::user::models::RegisterUserCommand;
use crate::user::models::User;
use crate::user::models::Username;

/// Port for user domain service operations.
///
/// Object-safe so handlers can hold `Arc<dyn UserServicePort>` and tests can
/// swap in fakes without touching the router.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with the default role.
    ///
    /// Hashes the password, persists the user, and sends a notification to
    /// the queue.
    ///
    /// # Errors
    /// * `AlreadyExists` - username is already taken
    /// * `Hashing` - password hashing failed
    /// * `Queue` - notification send failed (the insert is not rolled back)
    /// * `Database` - storage operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<(), UserError>;

    /// Verify credentials and issue an access token.
    ///
    /// The token embeds the role the user holds right now; a later role
    /// change is not reflected until the next login.
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown user or wrong password
    /// * `Token` - token issuance failed
    /// * `Database` - storage operation failed
    async fn login(&self, username: &Username, password: &str) -> Result<String, UserError>;

    /// Retrieve a user by username.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `Database` - storage operation failed
    async fn profile(&self, username: &Username) -> Result<User, UserError>;

    /// Change a user's role and persist it.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `Database` - storage operation failed
    async fn update_role(&self, username: &Username, new_role: Role) -> Result<User, UserError>;

    /// Delete a user.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `Database` - storage operation failed
    async fn remove(&self, username: &Username) -> Result<(), UserError>;

    /// Retrieve all users.
    ///
    /// # Errors
    /// * `Database` - storage operation failed
    async fn list(&self) -> Result<Vec<User>, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// A key-value contract: every operation except `list` is a single keyed
/// access on the username.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Check whether a username is already taken.
    async fn exists(&self, username: &Username) -> Result<bool, UserError>;

    /// Persist a new user.
    ///
    /// # Errors
    /// * `AlreadyExists` - a concurrent insert won the key
    /// * `Database` - storage operation failed
    async fn insert(&self, user: User) -> Result<(), UserError>;

    /// Retrieve a user by username (None if absent).
    async fn get(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Persist changes to an existing user.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `Database` - storage operation failed
    async fn update(&self, user: &User) -> Result<(), UserError>;

    /// Remove a user.
    ///
    /// # Errors
    /// * `NotFound` - user does not exist
    /// * `Database` - storage operation failed
    async fn delete(&self, user: &User) -> Result<(), UserError>;

    /// Retrieve all users (full scan).
    async fn list(&self) -> Result<Vec<User>, UserError>;
}

/// Fire-and-forget notification queue.
///
/// No consumer lives in this repository; delivery, retry, and backpressure
/// are the broker's concern.
#[async_trait]
pub trait NotificationQueue: Send + Sync + 'static {
    async fn send(&self, message: &str) -> Result<(), QueueError>;
}
