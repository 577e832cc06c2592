// Storage layer for Hookwatch control-plane
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// - Database: sqlx/PostgreSQL repository for the webhooks table
// - InMemoryDatabase: BTreeMap-backed store with the same ordering semantics
// - StorageBackend: enum dispatch over the two

pub mod backend;
pub mod memory;
pub mod models;
pub mod repositories;

pub use backend::StorageBackend;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::*;
