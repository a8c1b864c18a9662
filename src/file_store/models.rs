/// File storage data models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored file as returned by a retrieval
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub id: String,
    pub filename: String,
    pub content: Vec<u8>,
}

/// Metadata persisted alongside the payload
///
/// The disk backend writes this as a JSON sidecar next to the content
/// file; the SQLite backend keeps the same fields as row columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMetadata {
    pub filename: String,
    pub size: i64,
    pub uploaded_at: DateTime<Utc>,
}
