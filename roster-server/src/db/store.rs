//! Storage seam between handlers and the database

use async_trait::async_trait;

use crate::models::{NewUser, User};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("User with ID {id} not found")]
    NotFound { id: i32 },

    #[error("User with email {email} already exists")]
    Conflict { email: String },

    #[error("user id sequence exhausted")]
    IdsExhausted,
}

impl StoreError {
    /// Map an insert failure, turning a unique violation into `Conflict`.
    ///
    /// `email` is the only unique column a client can influence.
    pub fn from_insert(err: sqlx::Error, email: &str) -> Self {
        match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict {
                email: email.to_owned(),
            },
            other => Self::Sqlx(other),
        }
    }

    /// True when the backend could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            Self::Sqlx(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_))
        )
    }
}

/// User persistence operations
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// All users in insertion order.
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;

    /// A single user, or `StoreError::NotFound`.
    async fn get_by_id(&self, id: i32) -> Result<User, StoreError>;

    /// Persist a user and return it with its assigned id.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Check that the backend answers.
    async fn ping(&self) -> Result<(), StoreError>;
}
