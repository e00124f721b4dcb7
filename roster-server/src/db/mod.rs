//! Database layer - connection pool, schema and user stores
//!
//! # Design Principles
//!
//! - One pooled connection per store call, released when its guard drops
//! - Rely on the UNIQUE constraint for email, no check-then-insert
//! - Inserts run in a transaction that rolls back unless committed

pub mod memory;
pub mod migrate;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryUserStore;
pub use pool::{PoolConfig, DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgUserStore;
pub use store::{StoreError, UserStore};
