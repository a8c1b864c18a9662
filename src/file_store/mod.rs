/// File Storage System
///
/// Persists uploaded PDF payloads keyed by an opaque identifier.
/// Supports two interchangeable backend implementations (disk, SQLite).

pub mod disk;
pub mod models;
pub mod sqlite;

pub use disk::DiskFileStore;
pub use models::StoredFile;
pub use sqlite::SqliteFileStore;

use crate::error::AppResult;
use async_trait::async_trait;

/// File storage backend trait
///
/// Implementations persist and retrieve stored files by identifier.
/// Stored files are immutable: there is no update or delete operation,
/// the lifecycle is create-then-read-forever.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist a payload under a freshly generated identifier and return it.
    ///
    /// Either the full content is retrievable afterwards or the call
    /// reports failure; the identifier of a failed put is never revealed.
    async fn put(&self, filename: &str, content: Vec<u8>) -> AppResult<String>;

    /// Retrieve a stored file by identifier, or None if no file exists for it
    async fn get(&self, id: &str) -> AppResult<Option<StoredFile>>;
}
