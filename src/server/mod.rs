pub mod handlers;
pub mod types;

pub use handlers::AppState;

use crate::{Result, config::Config, workflow};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::read_root))
        .route("/health", get(handlers::health_check))
        .route("/analyze", post(handlers::analyze))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let workflow = workflow::resolve(config.workflow.as_ref());
    let app = router(AppState::new(workflow));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
