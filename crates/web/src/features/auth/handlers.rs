use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        auth::{
            ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
            ResetPasswordRequest, UpdatePasswordRequest,
        },
        common::MessageResponse,
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::{AuthKeys, AuthUser};
use crate::state::FrontendLinks;

use super::services;

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Validation error or unknown sport"),
        (status = 409, description = "Email already registered")
    ),
    tag = "auth"
)]
pub async fn register(
    State(db): State<Database>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::register(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
            user_id: user.user_id,
        }),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 401, description = "Invalid email or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(db): State<Database>,
    State(keys): State<AuthKeys>,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let (user, role) = services::login(db.pool(), &req).await?;
    let token = keys.issue(user.id, role)?;

    Ok(Json(LoginResponse { token, user }).into_response())
}

#[utoipa::path(
    post,
    path = "/logout",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Signed out", body = MessageResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth"
)]
pub async fn logout(Extension(user): Extension<AuthUser>) -> Result<Response, WebError> {
    tracing::debug!(user_id = %user.user_id, "Logout");

    Ok(Json(MessageResponse::new("Logged out")).into_response())
}

#[utoipa::path(
    post,
    path = "/forgot-password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Reset link issued if the account exists", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn forgot_password(
    State(db): State<Database>,
    State(links): State<FrontendLinks>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    if let Some(token) = services::forgot_password(db.pool(), &req.email).await? {
        tracing::info!(
            user_id = %token.user_id,
            link = %links.reset_password(token.token),
            "Password reset requested"
        );
    }

    Ok(Json(MessageResponse::new(
        "If that email is registered, a reset link has been sent",
    ))
    .into_response())
}

#[utoipa::path(
    post,
    path = "/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Token invalid, used or expired")
    ),
    tag = "auth"
)]
pub async fn reset_password(
    State(db): State<Database>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::reset_password(db.pool(), req.token, &req.new_password).await?;

    Ok(Json(MessageResponse::new("Password has been reset")).into_response())
}

#[utoipa::path(
    post,
    path = "/api/update-password",
    request_body = UpdatePasswordRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "auth"
)]
pub async fn update_password(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_password(db.pool(), user.user_id, &req.new_password).await?;

    Ok(Json(MessageResponse::new("Password updated successfully")).into_response())
}
