use sqlx::PgPool;
use storage::{
    dto::auth::{LoginRequest, RegisterRequest, SessionUser},
    models::{PasswordResetToken, User, UserRole},
    repository::{AuthRepository, UserRepository},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

const RESET_TOKEN_TTL_HOURS: i64 = 1;

/// Hash on the blocking pool.
pub async fn hash_password(password: &str) -> WebResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| WebError::InternalServerError(e.to_string()))?
        .map_err(|e| WebError::InternalServerError(e.to_string()))
}

async fn verify_password(password: &str, hash: &str) -> WebResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| WebError::InternalServerError(e.to_string()))?
        .map_err(|e| WebError::InternalServerError(e.to_string()))
}

pub async fn register(pool: &PgPool, req: &RegisterRequest) -> WebResult<User> {
    let password_hash = hash_password(&req.password).await?;
    let user = AuthRepository::new(pool).register(req, &password_hash).await?;

    tracing::info!(user_id = %user.user_id, role = %user.role, "Registered account");

    Ok(user)
}

/// Check credentials and return the session identity; every failure looks the same to the caller.
pub async fn login(pool: &PgPool, req: &LoginRequest) -> WebResult<(SessionUser, UserRole)> {
    let invalid = || WebError::Unauthorized("Invalid email or password".to_string());

    let credentials = AuthRepository::new(pool)
        .find_by_email(&req.email)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&req.password, &credentials.password_hash).await? {
        return Err(invalid());
    }

    let user = UserRepository::new(pool)
        .find_by_id(credentials.user_id)
        .await?;
    let role = user.role().ok_or_else(|| {
        WebError::InternalServerError(format!("Unknown role stored for {}", user.user_id))
    })?;

    Ok((
        SessionUser {
            id: user.user_id,
            name: user.fullname,
            role: user.role,
        },
        role,
    ))
}

/// Issue a reset token when the email belongs to an account.
pub async fn forgot_password(pool: &PgPool, email: &str) -> WebResult<Option<PasswordResetToken>> {
    let repo = AuthRepository::new(pool);

    let Some(credentials) = repo.find_by_email(email).await? else {
        return Ok(None);
    };

    let token = repo
        .create_reset_token(
            credentials.user_id,
            chrono::Duration::hours(RESET_TOKEN_TTL_HOURS),
        )
        .await?;

    Ok(Some(token))
}

/// Admin-initiated reset; the user must have credentials to reset.
pub async fn issue_reset_for_user(pool: &PgPool, user_id: Uuid) -> WebResult<PasswordResetToken> {
    let repo = AuthRepository::new(pool);

    let credentials = repo
        .find_by_user(user_id)
        .await?
        .ok_or_else(|| WebError::NotFound("User credentials not found".to_string()))?;

    let token = repo
        .create_reset_token(
            credentials.user_id,
            chrono::Duration::hours(RESET_TOKEN_TTL_HOURS),
        )
        .await?;

    Ok(token)
}

pub async fn reset_password(pool: &PgPool, token: Uuid, new_password: &str) -> WebResult<Uuid> {
    let password_hash = hash_password(new_password).await?;
    let user_id = AuthRepository::new(pool)
        .consume_reset_token(token, &password_hash)
        .await?;

    tracing::info!(user_id = %user_id, "Password reset");

    Ok(user_id)
}

pub async fn update_password(pool: &PgPool, user_id: Uuid, new_password: &str) -> WebResult<()> {
    let password_hash = hash_password(new_password).await?;
    AuthRepository::new(pool)
        .update_password(user_id, &password_hash)
        .await?;

    Ok(())
}
