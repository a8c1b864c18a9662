/// API routes and handlers
pub mod files;
pub mod pages;

use crate::context::AppContext;
use axum::Router;

/// Build API routes
pub fn routes() -> Router<AppContext> {
    Router::new().merge(pages::routes()).merge(files::routes())
}
