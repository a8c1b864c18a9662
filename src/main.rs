/// pdfdrop - PDF upload and inline viewing service
///
/// Accepts PDF uploads over a multipart form, persists them behind an
/// opaque identifier (disk or SQLite backend), and serves them back for
/// inline display in the browser.

mod api;
mod config;
mod context;
mod db;
mod error;
mod file_store;
mod id;
mod server;
mod templates;

use config::ServerConfig;
use context::AppContext;
use error::AppResult;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdfdrop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    print_banner();

    // Load configuration
    let config = ServerConfig::from_env()?;

    // Create application context (storage init happens here)
    let ctx = AppContext::new(config).await?;

    // Start server
    server::serve(ctx).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
               ____    __
    ____  ____/ / _/__/ /________  ____
   / __ \/ __  / /_/ __  / ___/ __ \/ __ \
  / /_/ / /_/ / __/ /_/ / /  / /_/ / /_/ /
 / .___/\__,_/_/  \__,_/_/   \____/ .___/
/_/                              /_/

        PDF upload service v{}
        "#,
        env!("CARGO_PKG_VERSION")
    );
}
