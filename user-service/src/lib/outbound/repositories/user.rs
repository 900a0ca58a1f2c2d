use async_trait::async_trait;
use auth::Role;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::user::errors::UserError;
use crate::user::models::User;
use crate::user::models::Username;
use crate::user::ports::UserStore;

/// Postgres adapter for the user store port.
///
/// The table is keyed by username; every operation except `list` is a single
/// keyed statement.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: &PgRow) -> Result<User, UserError> {
    let username: String = row
        .try_get("username")
        .map_err(|e| UserError::Database(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| UserError::Database(e.to_string()))?;
    let role: String = row
        .try_get("role")
        .map_err(|e| UserError::Database(e.to_string()))?;

    Ok(User {
        username: Username::new(username)?,
        password_hash,
        role: role
            .parse::<Role>()
            .map_err(|e| UserError::Database(format!("Stored role is invalid: {}", e)))?,
    })
}

#[async_trait]
impl UserStore for PostgresUserRepository {
    async fn exists(&self, username: &Username) -> Result<bool, UserError> {
        let row = sqlx::query("SELECT 1 FROM users WHERE username = $1")
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::Database(e.to_string()))?;

        Ok(row.is_some())
    }

    async fn insert(&self, user: User) -> Result<(), UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // A concurrent insert can win the key between the exists
                // check and this statement.
                if db_err.is_unique_violation() {
                    return UserError::AlreadyExists(user.username.to_string());
                }
            }
            UserError::Database(e.to_string())
        })?;

        Ok(())
    }

    async fn get(&self, username: &Username) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT username, password_hash, role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn update(&self, user: &User) -> Result<(), UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET password_hash = $2, role = $3
            WHERE username = $1
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.username.to_string()));
        }

        Ok(())
    }

    async fn delete(&self, user: &User) -> Result<(), UserError> {
        let result = sqlx::query("DELETE FROM users WHERE username = $1")
            .bind(user.username.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(user.username.to_string()));
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query(
            r#"
            SELECT username, password_hash, role
            FROM users
            ORDER BY username
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| UserError::Database(e.to_string()))?;

        rows.iter().map(row_to_user).collect()
    }
}
