//! Axum server setup and routing

use crate::routes;
use crate::state::AppState;
use axum::{
    routing::{delete, get},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use vidcat_store::VideoStore;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/videos",
            get(routes::list_videos).post(routes::create_video),
        )
        .route(
            "/videos/:id",
            delete(routes::delete_video).put(routes::update_video),
        )
        .route("/videos/folder/:folder", get(routes::videos_by_folder))
        .route("/videos/tag/:tag", get(routes::videos_by_tag))
        // Add state
        .with_state(state)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Start the web server
pub async fn serve(store: VideoStore, port: u16) -> anyhow::Result<()> {
    let app = router(AppState::new(store));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("starting vidcat API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
