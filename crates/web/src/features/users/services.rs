use sqlx::PgPool;
use storage::{
    dto::user::{SettingsResponse, UpdateSettingsRequest, UserProfileResponse},
    error::Result,
    models::{Sport, User},
    repository::{EventRepository, UserRepository},
};
use uuid::Uuid;

use crate::features::tolerate;

pub async fn list_users(pool: &PgPool) -> Result<Vec<User>> {
    UserRepository::new(pool).list().await
}

pub async fn list_sports(pool: &PgPool) -> Result<Vec<Sport>> {
    UserRepository::new(pool).list_sports().await
}

pub async fn verify_user(pool: &PgPool, id: Uuid, status: &str) -> Result<User> {
    let user = UserRepository::new(pool)
        .set_verification_status(id, status)
        .await?;

    tracing::info!(user_id = %id, status, "Verification status changed");

    Ok(user)
}

pub async fn delete_user(pool: &PgPool, id: Uuid) -> Result<()> {
    UserRepository::new(pool).delete(id).await?;

    tracing::info!(user_id = %id, "User deleted");

    Ok(())
}

pub async fn get_settings(pool: &PgPool, id: Uuid) -> Result<SettingsResponse> {
    let repo = UserRepository::new(pool);
    let user = repo.find_by_id(id).await?;
    let details = repo.details(id).await?;

    Ok(SettingsResponse { user, details })
}

pub async fn update_settings(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateSettingsRequest,
) -> Result<SettingsResponse> {
    let (user, details) = UserRepository::new(pool).update_settings(id, req).await?;

    Ok(SettingsResponse {
        user,
        details: Some(details),
    })
}

/// Public profile; only the user lookup is required to succeed
pub async fn get_profile(pool: &PgPool, id: Uuid) -> Result<UserProfileResponse> {
    let users = UserRepository::new(pool);
    let user = users.find_by_id(id).await?;

    let avatar_url = tolerate(users.details(id).await, "user details").and_then(|d| d.avatar_url);
    let events = tolerate(
        EventRepository::new(pool).list_by_organizer(id).await,
        "organized events",
    );
    let achievements = tolerate(users.achievements(id).await, "achievements");

    Ok(UserProfileResponse {
        user,
        avatar_url,
        events,
        achievements,
    })
}
