use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::errors::ServerError;
use crate::handles::*;
use crate::services::ForwardService;

pub fn create_app(settings: &Arc<Settings>) -> Result<Router, ServerError> {
    let forward_service = Arc::new(ForwardService::new(settings.gateway.clone())?);

    Ok(forward_router(ForwardState { forward_service }))
}

pub fn forward_router(forward_state: ForwardState) -> Router {
    Router::new()
        .route("/forward", get(forward))
        .with_state(forward_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
