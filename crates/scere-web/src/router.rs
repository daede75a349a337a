//! Axum router — maps all URL paths to handlers.

use crate::handlers::{meta, network, projection, upload};
use crate::state::{AppState, SharedState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/healthz", get(meta::healthz))
        .route("/api/go-terms", get(meta::go_terms))
        .route("/api/demo/genes", get(meta::demo_genes))
        .route("/api/demo/quantitative", get(meta::demo_quantitative))
        .route("/api/upload", post(upload::upload))
        .route("/api/projection/2d", post(projection::projection_2d))
        .route("/api/projection/3d", post(projection::projection_3d))
        .route(
            "/api/projection/quantitative",
            post(projection::projection_quantitative),
        )
        .route("/api/chromosomes/3d", get(projection::chromosomes_3d))
        .route("/api/network", post(network::network))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
