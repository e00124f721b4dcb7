//! User record types
//!
//! `User` is both the row shape and the wire shape. `NewUser` is the
//! create payload; any `id` sent by the client is dropped during
//! deserialization because the store assigns it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

/// Fields supplied when creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl NewUser {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            firstname: self.firstname,
            lastname: self.lastname,
            email: self.email,
        }
    }
}
