use sqlx::PgPool;
use storage::{error::Result, models::Follow, repository::FollowRepository};
use uuid::Uuid;

pub async fn follow(pool: &PgPool, follower_id: Uuid, following_id: Uuid) -> Result<Follow> {
    let follow = FollowRepository::new(pool)
        .follow(follower_id, following_id)
        .await?;

    tracing::debug!(follower = %follower_id, following = %following_id, "Follow created");

    Ok(follow)
}

pub async fn unfollow(pool: &PgPool, follower_id: Uuid, following_id: Uuid) -> Result<()> {
    FollowRepository::new(pool)
        .unfollow(follower_id, following_id)
        .await
}

pub async fn is_following(pool: &PgPool, follower_id: Uuid, following_id: Uuid) -> Result<bool> {
    FollowRepository::new(pool)
        .is_following(follower_id, following_id)
        .await
}

pub async fn follower_count(pool: &PgPool, user_id: Uuid) -> Result<i64> {
    FollowRepository::new(pool).follower_count(user_id).await
}

pub async fn following_count(pool: &PgPool, user_id: Uuid) -> Result<i64> {
    FollowRepository::new(pool).following_count(user_id).await
}
