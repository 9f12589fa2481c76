use std::sync::Arc;

use axum::extract::{Query, State};
use lumen_api::ForwardQuery;

use crate::errors::ForwardError;
use crate::services::ForwardService;

#[derive(Clone)]
pub struct ForwardState {
    pub forward_service: Arc<ForwardService>,
}

#[utoipa::path(
    get,
    path = "/forward",
    tag = "forward",
    params(
        ("sid" = String, Query, description = "Sender id registered with the gateway"),
        ("grp" = String, Query, description = "Receiver group"),
        ("title" = String, Query, description = "Notification title"),
        ("text" = String, Query, description = "Notification text"),
        ("icon" = String, Query, description = "Icon code")
    ),
    responses(
        (status = 200, description = "Gateway status code, or -1 if the gateway was not reached", body = String, content_type = "text/plain")
    )
)]
pub async fn forward(
    State(state): State<ForwardState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> String {
    let query = ForwardQuery::from_pairs(pairs);

    match state.forward_service.forward(&query).await {
        Ok(status) => status.to_string(),
        Err(e) => {
            tracing::error!("{}", e);
            ForwardError::STATUS_SENTINEL.to_string()
        }
    }
}
