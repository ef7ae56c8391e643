use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;
use service::assets::AssetStore;

pub mod assets;

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn AssetStore>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Asset CRUD routes, nested under `/api/assets`.
pub fn asset_routes() -> Router<ServerState> {
    Router::new()
        .route("/save", post(assets::save_asset))
        .route("/load/:asset_type/:name", get(assets::load_asset))
        .route("/list/:asset_type", get(assets::list_assets))
        .route("/delete/:asset_type/:name", delete(assets::delete_asset))
}

/// Build the full application router: health, asset API, and the static frontend.
pub fn build_router(state: ServerState, cors: CorsLayer, frontend_dir: &str) -> Router {
    let static_dir = ServeDir::new(frontend_dir)
        .fallback(ServeFile::new(format!("{frontend_dir}/index.html")));

    Router::new()
        .route("/health", get(health))
        .nest("/api/assets", asset_routes())
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
