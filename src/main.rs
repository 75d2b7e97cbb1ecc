use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;

use folio::config::Config;
use folio::handlers::{handle_repo, handle_repo_path, handle_root};
use folio::logger::Logger;
use folio::types::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Logger::init()?;

    let config = Arc::new(Config::from_env());
    let state = AppState {
        config: Arc::clone(&config),
        http: reqwest::Client::new(),
    };

    let app = Router::new()
        .route("/", get(handle_root))
        .route("/:owner/:repo", get(handle_repo))
        .route("/:owner/:repo/*path", get(handle_repo_path))
        .with_state(state);

    let addr = config.socket_addr();
    log::info!("Folio listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
