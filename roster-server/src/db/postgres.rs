//! PostgreSQL user store
//!
//! Every call checks a connection out of the pool for its own duration.
//! The `PoolConnection` / `Transaction` guard hands it back on drop, so
//! early returns and unwinding both release it.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{StoreError, UserStore};
use crate::models::{NewUser, User};

/// User store backed by the `users` table
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let mut conn = self.pool.acquire().await?;

        let users = sqlx::query_as::<_, User>(
            "SELECT id, firstname, lastname, email FROM users ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(users)
    }

    async fn get_by_id(&self, id: i32) -> Result<User, StoreError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query_as::<_, User>("SELECT id, firstname, lastname, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    /// Insert inside a transaction; a failed insert rolls back when `tx` drops.
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (firstname, lastname, email)
            VALUES ($1, $2, $3)
            RETURNING id, firstname, lastname, email
            "#,
        )
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StoreError::from_insert(e, &user.email))?;

        tx.commit().await?;
        Ok(created)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}
