use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::athlete::{StatsUpdatedResponse, UpsertStatsRequest},
    models::AthleteStats,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/athlete-stats",
    responses(
        (status = 200, description = "Stats rows for every athlete", body = Vec<AthleteStats>)
    ),
    tag = "athletes"
)]
pub async fn list_stats(State(db): State<Database>) -> Result<Response, WebError> {
    let stats = services::list_stats(db.pool()).await?;

    Ok(Json(stats).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athlete-stats/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete user id")
    ),
    request_body = UpsertStatsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Stats saved", body = StatsUpdatedResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your profile"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn upsert_stats(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpsertStatsRequest>,
) -> Result<Response, WebError> {
    user.ensure_self_or_admin(id)?;
    req.validate()?;

    let stats = services::upsert_stats(db.pool(), id, &req).await?;

    Ok(Json(StatsUpdatedResponse {
        message: "Stats updated successfully".to_string(),
        stats,
    })
    .into_response())
}
