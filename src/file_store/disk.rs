/// Disk-based file storage backend
use crate::{
    error::{AppError, AppResult},
    file_store::{
        models::{FileMetadata, StoredFile},
        FileStore,
    },
    id,
};
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use tokio::fs;

/// Disk storage backend
///
/// Stores each upload as `{base}/{id}.pdf` with a `{base}/{id}.json`
/// sidecar carrying the original filename, size, and upload time.
#[derive(Clone)]
pub struct DiskFileStore {
    base_path: PathBuf,
}

impl DiskFileStore {
    /// Create a new disk storage backend
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Content file path for an identifier
    fn content_path(&self, id: &str) -> PathBuf {
        self.base_path.join(format!("{}.pdf", id))
    }

    /// Metadata sidecar path for an identifier
    fn metadata_path(&self, id: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }
}

#[async_trait]
impl FileStore for DiskFileStore {
    async fn put(&self, filename: &str, content: Vec<u8>) -> AppResult<String> {
        let file_id = id::generate();

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            AppError::Storage(format!("Failed to create upload directory: {}", e))
        })?;

        let metadata = FileMetadata {
            filename: filename.to_string(),
            size: content.len() as i64,
            uploaded_at: Utc::now(),
        };

        fs::write(self.content_path(&file_id), &content)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to write file {}: {}", file_id, e)))?;

        // A failed sidecar write fails the whole put; the id never leaves
        // this function, so the orphaned content file stays unreachable.
        let metadata_json = serde_json::to_vec(&metadata)
            .map_err(|e| AppError::Storage(format!("Failed to encode metadata: {}", e)))?;
        fs::write(self.metadata_path(&file_id), metadata_json)
            .await
            .map_err(|e| {
                AppError::Storage(format!("Failed to write metadata {}: {}", file_id, e))
            })?;

        tracing::info!(id = %file_id, filename = %filename, size = metadata.size, "stored file on disk");

        Ok(file_id)
    }

    async fn get(&self, id: &str) -> AppResult<Option<StoredFile>> {
        let content = match fs::read(self.content_path(id)).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read file {}: {}",
                    id, e
                )))
            }
        };

        let metadata_json = match fs::read(self.metadata_path(id)).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "Failed to read metadata {}: {}",
                    id, e
                )))
            }
        };

        let metadata: FileMetadata = serde_json::from_slice(&metadata_json)
            .map_err(|e| AppError::Storage(format!("Corrupt metadata for {}: {}", id, e)))?;

        Ok(Some(StoredFile {
            id: id.to_string(),
            filename: metadata.filename,
            content,
        }))
    }
}
