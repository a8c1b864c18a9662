/// Upload and retrieval endpoints
use crate::{
    context::AppContext,
    error::{AppError, AppResult},
    file_store::FileStore,
};
use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{Redirect, Response},
    routing::{get, post},
    Router,
};

/// Build file routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/upload", post(upload_pdf))
        .route("/pdf/:id", get(view_pdf))
}

/// Upload a PDF and redirect to its viewing URL
///
/// Accepts multipart/form-data with a `file` part. The only validation is
/// a case-insensitive `.pdf` suffix check on the client-supplied filename;
/// payload bytes are never inspected. The full body is buffered before
/// storage.
async fn upload_pdf(
    State(ctx): State<AppContext>,
    mut multipart: Multipart,
) -> AppResult<Redirect> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::debug!("failed to read multipart field: {}", e);
        AppError::InvalidInput(format!("Failed to read multipart data: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidInput("Upload is missing a filename".to_string()))?;

        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(AppError::InvalidInput(
                "File must be a PDF".to_string(),
            ));
        }

        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?
            .to_vec();

        let file_id = ctx.store.put(&filename, content).await?;

        return Ok(Redirect::to(&format!("/pdf/{}", file_id)));
    }

    Err(AppError::InvalidInput(
        "Multipart form is missing a 'file' field".to_string(),
    ))
}

/// Serve a stored PDF for inline viewing in the browser
async fn view_pdf(
    State(ctx): State<AppContext>,
    Path(file_id): Path<String>,
) -> AppResult<Response> {
    let file = ctx
        .store
        .get(&file_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("File not found: {}", file_id)))?;

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_LENGTH, file.content.len().to_string())
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{}\"", disposition_filename(&file.filename)),
        )
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from(file.content))
        .unwrap())
}

/// Strip characters that cannot appear in a quoted header value
fn disposition_filename(filename: &str) -> String {
    filename
        .chars()
        .filter(|c| c.is_ascii() && !c.is_ascii_control() && *c != '"')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{LoggingConfig, ServerConfig, ServiceConfig, StorageBackendConfig, StorageConfig},
        context::AppContext,
        server,
    };
    use axum_test::TestServer;
    use tempfile::tempdir;

    const BOUNDARY: &str = "pdfdrop-test-boundary";

    fn test_config(dir: &tempfile::TempDir, backend: StorageBackendConfig) -> ServerConfig {
        ServerConfig {
            service: ServiceConfig {
                hostname: "localhost".to_string(),
                port: 8000,
            },
            storage: StorageConfig {
                data_directory: dir.path().to_path_buf(),
                backend,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }

    async fn disk_server(dir: &tempfile::TempDir) -> TestServer {
        let backend = StorageBackendConfig::Disk {
            location: dir.path().join("uploads"),
        };
        let ctx = AppContext::new(test_config(dir, backend)).await.unwrap();
        TestServer::new(server::build_router(ctx)).unwrap()
    }

    async fn sqlite_server(dir: &tempfile::TempDir) -> TestServer {
        let backend = StorageBackendConfig::Sqlite {
            db_path: dir.path().join("files.sqlite"),
        };
        let ctx = AppContext::new(test_config(dir, backend)).await.unwrap();
        TestServer::new(server::build_router(ctx)).unwrap()
    }

    fn multipart_body(filename: &str, content: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n\
                 Content-Type: application/pdf\r\n\r\n",
                BOUNDARY, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    async fn upload(server: &TestServer, filename: &str, content: &[u8]) -> axum_test::TestResponse {
        server
            .post("/upload")
            .content_type(&format!("multipart/form-data; boundary={}", BOUNDARY))
            .bytes(multipart_body(filename, content).into())
            .await
    }

    #[tokio::test]
    async fn test_upload_then_view_roundtrip() {
        let dir = tempdir().unwrap();
        let server = disk_server(&dir).await;
        let content = b"%PDF-1.4 example document";

        let response = upload(&server, "report.PDF", content).await;
        response.assert_status(StatusCode::SEE_OTHER);

        let location = response
            .headers()
            .get("location")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(location.starts_with("/pdf/"));

        let view = server.get(&location).await;
        view.assert_status(StatusCode::OK);
        assert_eq!(view.as_bytes().to_vec(), content.to_vec());

        let headers = view.headers();
        assert_eq!(headers.get("content-type").unwrap(), "application/pdf");
        assert_eq!(
            headers.get("content-disposition").unwrap(),
            "inline; filename=\"report.PDF\""
        );
        assert_eq!(headers.get("cache-control").unwrap(), "no-cache");
        assert_eq!(
            headers.get("content-length").unwrap().to_str().unwrap(),
            content.len().to_string()
        );
    }

    #[tokio::test]
    async fn test_upload_then_view_roundtrip_sqlite() {
        let dir = tempdir().unwrap();
        let server = sqlite_server(&dir).await;
        let content = b"%PDF-1.4 relational copy";

        let response = upload(&server, "invoice.pdf", content).await;
        response.assert_status(StatusCode::SEE_OTHER);

        let location = response
            .headers()
            .get("location")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let view = server.get(&location).await;
        view.assert_status(StatusCode::OK);
        assert_eq!(view.as_bytes().to_vec(), content.to_vec());
        assert_eq!(
            view.headers().get("content-disposition").unwrap(),
            "inline; filename=\"invoice.pdf\""
        );
    }

    #[tokio::test]
    async fn test_non_pdf_filename_is_rejected() {
        let dir = tempdir().unwrap();
        let server = disk_server(&dir).await;

        let response = upload(&server, "notes.txt", b"plain text").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        // No file was written
        let entries: Vec<_> = std::fs::read_dir(dir.path().join("uploads"))
            .unwrap()
            .collect();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_extension_check_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let server = disk_server(&dir).await;

        let response = upload(&server, "SHOUTY.PDF", b"%PDF-1.4").await;
        response.assert_status(StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_missing_file_field_is_rejected() {
        let dir = tempdir().unwrap();
        let server = disk_server(&dir).await;

        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\nhello\r\n--{b}--\r\n",
            b = BOUNDARY
        );
        let response = server
            .post("/upload")
            .content_type(&format!("multipart/form-data; boundary={}", BOUNDARY))
            .bytes(body.into_bytes().into())
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let dir = tempdir().unwrap();
        let server = disk_server(&dir).await;

        let response = server.get("/pdf/nonexistent-id").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_identical_uploads_stay_independent() {
        let dir = tempdir().unwrap();
        let server = disk_server(&dir).await;
        let content = b"%PDF-1.4 twin";

        let first = upload(&server, "twin.pdf", content).await;
        let second = upload(&server, "twin.pdf", content).await;

        let loc_a = first.headers().get("location").unwrap().to_str().unwrap().to_string();
        let loc_b = second.headers().get("location").unwrap().to_str().unwrap().to_string();
        assert_ne!(loc_a, loc_b);

        server.get(&loc_a).await.assert_status(StatusCode::OK);
        server.get(&loc_b).await.assert_status(StatusCode::OK);
    }

    #[test]
    fn test_disposition_filename_strips_unsafe_characters() {
        assert_eq!(disposition_filename("report.pdf"), "report.pdf");
        assert_eq!(disposition_filename("a\"b.pdf"), "ab.pdf");
        assert_eq!(disposition_filename("a\r\nb.pdf"), "ab.pdf");
        // Non-ASCII cannot go into a header value
        assert_eq!(disposition_filename("r\u{e9}sum\u{e9}.pdf"), "rsum.pdf");
    }
}
