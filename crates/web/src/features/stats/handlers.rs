use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::stats::PlatformStats};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Platform-wide counters", body = PlatformStats)
    ),
    tag = "stats"
)]
pub async fn platform_stats(State(db): State<Database>) -> Result<Response, WebError> {
    let stats = services::platform_stats(db.pool()).await?;

    Ok(Json(stats).into_response())
}
