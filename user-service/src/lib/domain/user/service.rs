use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::Principal;
use auth::Role;
use auth::TokenService;

use crate::user::errors::UserError;
use crate::user::models::RegisterUserCommand;
use crate::user::models::User;
use crate::user::models::Username;
use crate::user::ports::NotificationQueue;
use crate::user::ports::UserServicePort;
use crate::user::ports::UserStore;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<S, Q>
where
    S: UserStore,
    Q: NotificationQueue,
{
    store: Arc<S>,
    queue: Arc<Q>,
    tokens: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl<S, Q> UserService<S, Q>
where
    S: UserStore,
    Q: NotificationQueue,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - User persistence implementation
    /// * `queue` - Notification queue implementation
    /// * `tokens` - Token service sharing the process-wide signing secret
    pub fn new(store: Arc<S>, queue: Arc<Q>, tokens: Arc<TokenService>) -> Self {
        Self {
            store,
            queue,
            tokens,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<S, Q> UserServicePort for UserService<S, Q>
where
    S: UserStore,
    Q: NotificationQueue,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<(), UserError> {
        if self.store.exists(&command.username).await? {
            return Err(UserError::AlreadyExists(command.username.to_string()));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = User {
            username: command.username,
            password_hash,
            role: Role::User,
        };
        let message = format!("New user created {}", user.username);

        self.store.insert(user).await?;

        // The insert is not compensated when the send fails; the caller sees
        // an internal error and the two collaborators stay inconsistent.
        self.queue.send(&message).await?;

        Ok(())
    }

    async fn login(&self, username: &Username, password: &str) -> Result<String, UserError> {
        let user = self
            .store
            .get(username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify(password, &user.password_hash)
            .unwrap_or_else(|e| {
                tracing::warn!(username = %username, error = %e, "Stored password hash unreadable");
                false
            });

        if !is_valid {
            return Err(UserError::InvalidCredentials);
        }

        let principal = Principal::new(user.username.as_str(), user.role);
        self.tokens
            .issue(&principal)
            .map_err(|e| UserError::Token(e.to_string()))
    }

    async fn profile(&self, username: &Username) -> Result<User, UserError> {
        self.store
            .get(username)
            .await?
            .ok_or(UserError::NotFound(username.to_string()))
    }

    async fn update_role(&self, username: &Username, new_role: Role) -> Result<User, UserError> {
        let mut user = self
            .store
            .get(username)
            .await?
            .ok_or(UserError::NotFound(username.to_string()))?;

        user.role = new_role;
        self.store.update(&user).await?;

        Ok(user)
    }

    async fn remove(&self, username: &Username) -> Result<(), UserError> {
        let user = self
            .store
            .get(username)
            .await?
            .ok_or(UserError::NotFound(username.to_string()))?;

        self.store.delete(&user).await
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        self.store.list().await
    }
}
