use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::MessageResponse,
        user::{
            SettingsResponse, UpdateSettingsRequest, UserProfileResponse, UserSummary,
            UserVerifiedResponse, VerifyUserRequest,
        },
    },
    models::Sport,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::features::auth::services as auth_services;
use crate::middleware::auth::AuthUser;
use crate::state::FrontendLinks;

use super::services;

#[utoipa::path(
    get,
    path = "/sports",
    responses(
        (status = 200, description = "Sports offered at registration", body = Vec<Sport>)
    ),
    tag = "users"
)]
pub async fn list_sports(State(db): State<Database>) -> Result<Response, WebError> {
    let sports = services::list_sports(db.pool()).await?;

    Ok(Json(sports).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All users", body = Vec<UserSummary>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin access required")
    ),
    tag = "admin"
)]
pub async fn list_users(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
) -> Result<Response, WebError> {
    user.ensure_admin()?;

    let users = services::list_users(db.pool()).await?;
    let response: Vec<UserSummary> = users.into_iter().map(UserSummary::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    put,
    path = "/api/user-action/verify/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    request_body = VerifyUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Verification status updated", body = UserVerifiedResponse),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User not found")
    ),
    tag = "admin"
)]
pub async fn verify_user(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    body: Option<Json<VerifyUserRequest>>,
) -> Result<Response, WebError> {
    user.ensure_admin()?;

    let req = body.map(|Json(req)| req).unwrap_or_default();
    req.validate()?;

    let verified = services::verify_user(db.pool(), id, req.status()).await?;

    Ok(Json(UserVerifiedResponse {
        message: "User verification status updated".to_string(),
        user: UserSummary::from(verified),
    })
    .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/user-action/delete/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User not found")
    ),
    tag = "admin"
)]
pub async fn delete_user(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    user.ensure_admin()?;

    services::delete_user(db.pool(), id).await?;

    Ok(Json(MessageResponse::new("User deleted successfully")).into_response())
}

#[utoipa::path(
    post,
    path = "/api/user-action/reset-password/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Reset link issued", body = MessageResponse),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User has no credentials")
    ),
    tag = "admin"
)]
pub async fn reset_user_password(
    State(db): State<Database>,
    State(links): State<FrontendLinks>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    user.ensure_admin()?;

    let token = auth_services::issue_reset_for_user(db.pool(), id).await?;
    tracing::info!(
        user_id = %id,
        link = %links.reset_password(token.token),
        "Admin issued password reset"
    );

    Ok(Json(MessageResponse::new("Password reset link sent")).into_response())
}

#[utoipa::path(
    get,
    path = "/api/settings/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User settings", body = SettingsResponse),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_settings(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let settings = services::get_settings(db.pool(), id).await?;

    Ok(Json(settings).into_response())
}

#[utoipa::path(
    put,
    path = "/api/settings/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    request_body = UpdateSettingsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Settings saved", body = SettingsResponse),
        (status = 400, description = "Validation error or unknown sport"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your account"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn update_settings(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Response, WebError> {
    user.ensure_self_or_admin(id)?;
    req.validate()?;

    let settings = services::update_settings(db.pool(), id, &req).await?;

    Ok((StatusCode::OK, Json(settings)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/organizers/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Profile with organized events", body = UserProfileResponse),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_organizer(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let profile = services::get_profile(db.pool(), id).await?;

    Ok(Json(profile).into_response())
}
