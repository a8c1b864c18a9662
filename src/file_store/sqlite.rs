/// SQLite-backed file storage backend
use crate::{
    error::{AppError, AppResult},
    file_store::{models::StoredFile, FileStore},
    id,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

/// Relational storage backend
///
/// One row per upload in the stored_files table; the row insert is a
/// single statement, so a put is atomic for callers.
#[derive(Clone)]
pub struct SqliteFileStore {
    pool: SqlitePool,
}

impl SqliteFileStore {
    /// Create a new SQLite storage backend over an initialized pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for SqliteFileStore {
    async fn put(&self, filename: &str, content: Vec<u8>) -> AppResult<String> {
        let file_id = id::generate();
        let size = content.len() as i64;

        sqlx::query(
            r#"
            INSERT INTO stored_files (id, filename, file_data, upload_date, file_size)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&file_id)
        .bind(filename)
        .bind(&content)
        .bind(Utc::now().to_rfc3339())
        .bind(size)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        tracing::info!(id = %file_id, filename = %filename, size, "stored file in database");

        Ok(file_id)
    }

    async fn get(&self, id: &str) -> AppResult<Option<StoredFile>> {
        let result = sqlx::query(
            r#"
            SELECT id, filename, file_data
            FROM stored_files
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if let Some(row) = result {
            Ok(Some(StoredFile {
                id: row.try_get("id")?,
                filename: row.try_get("filename")?,
                content: row.try_get("file_data")?,
            }))
        } else {
            Ok(None)
        }
    }
}
