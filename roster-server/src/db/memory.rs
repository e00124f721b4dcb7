//! In-process user store
//!
//! Same observable behavior as the PostgreSQL store: ids start at 1 and
//! are never reused, emails are unique, listing is in insertion order.
//! Nothing survives a restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{StoreError, UserStore};
use crate::models::{NewUser, User};

#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    users: Vec<User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn get_by_id(&self, id: i32) -> Result<User, StoreError> {
        self.inner
            .read()
            .await
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.iter().any(|existing| existing.email == user.email) {
            return Err(StoreError::Conflict { email: user.email });
        }

        let id = inner.last_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        inner.last_id = id;

        let created = user.with_id(id);
        inner.users.push(created.clone());
        Ok(created)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            firstname: "Ann".into(),
            lastname: "Lee".into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let store = MemoryUserStore::new();

        let first = store.create(new_user("a@x.com")).await.unwrap();
        let second = store.create(new_user("b@x.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryUserStore::new();
        store.create(new_user("a@x.com")).await.unwrap();

        let err = store.create(new_user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { ref email } if email == "a@x.com"));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_conflict() {
        let store = MemoryUserStore::new();
        store.create(new_user("a@x.com")).await.unwrap();
        let _ = store.create(new_user("a@x.com")).await;

        let next = store.create(new_user("c@x.com")).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = MemoryUserStore::new();
        let err = store.get_by_id(3).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 3 }));
    }

    #[tokio::test]
    async fn exhausted_ids_error() {
        let store = MemoryUserStore::new();
        store.inner.write().await.last_id = i32::MAX;

        let err = store.create(new_user("a@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted));
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryUserStore::new());

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(new_user(&format!("user{}@x.com", i)))
                        .await
                        .expect("create failed")
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.expect("task panicked"));
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }
}
