//! SQLite-backed user store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Channel preference assigned when the caller does not choose one.
pub const DEFAULT_CHANNEL_PREFERENCE: &str = "sms";

/// Store error types.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A UNIQUE constraint (phone_number or email) rejected an insert.
    #[error("unique constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// A registered user row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub phone_number: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub channel_preference: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Attributes for a user to be created.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub phone_number: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub channel_preference: String,
}

impl NewUser {
    /// A user known only by phone number, as created from an inbound message.
    pub fn from_phone(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            email: None,
            first_name: None,
            last_name: None,
            channel_preference: DEFAULT_CHANNEL_PREFERENCE.into(),
        }
    }
}

/// Handle to the `users` table.
///
/// Constructed once at startup and cloned into request state; rows are
/// created by the webhook and registration paths and never updated or
/// deleted. Uniqueness of `phone_number` (and `email` when present) is
/// enforced by the schema, which is the final arbiter when two creation
/// attempts race.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    /// Connect to the database, creating the file and schema if absent.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        info!(%url, "user store ready");
        Ok(Self { pool })
    }

    /// Exact-match lookup on the phone number key.
    ///
    /// Absence is a normal result, not an error.
    pub async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, phone_number, email, first_name, last_name,
                   channel_preference, created_at, is_active
            FROM users
            WHERE phone_number = ?
            "#,
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Insert a new user and return the persisted row.
    ///
    /// A UNIQUE collision surfaces as `StoreError::ConstraintViolation`.
    pub async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (phone_number, email, first_name, last_name,
                               channel_preference, created_at, is_active)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, phone_number, email, first_name, last_name,
                      channel_preference, created_at, is_active
            "#,
        )
        .bind(&new_user.phone_number)
        .bind(&new_user.email)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.channel_preference)
        .bind(Utc::now())
        .bind(true)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::ConstraintViolation(db.message().to_string())
            }
            other => StoreError::Database(other),
        })?;
        Ok(user)
    }

    /// Total number of user rows.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
