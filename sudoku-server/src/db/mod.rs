//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One bounded pool per process, cloned into handler state
//! - One parameterized statement per repository call
//! - No transactions; the store's row locking serializes concurrent updates
//! - The schema belongs to the store, not to this crate: writes let the
//!   store coerce values, reads go through `to_jsonb` for column-typed JSON

pub mod pool;
pub mod repos;
pub mod scalar;

pub use pool::{create_pool, DbConfig};
pub use repos::*;
pub use scalar::Scalar;
