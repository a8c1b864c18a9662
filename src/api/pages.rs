/// Static HTML page endpoints
use crate::{context::AppContext, error::AppResult, templates};
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};

/// Build page routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/", get(maintenance_page))
        .route("/upload-files", get(upload_page))
}

/// Landing page - maintenance notice
async fn maintenance_page(State(ctx): State<AppContext>) -> AppResult<Html<String>> {
    Ok(Html(templates::render_page(&ctx.templates, "maintenance.html")?))
}

/// PDF upload form page
async fn upload_page(State(ctx): State<AppContext>) -> AppResult<Html<String>> {
    Ok(Html(templates::render_page(&ctx.templates, "index.html")?))
}
