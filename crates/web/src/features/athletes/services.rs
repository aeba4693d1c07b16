use sqlx::PgPool;
use storage::{
    dto::athlete::{AthleteListItem, AthleteProfileResponse},
    error::Result,
    repository::{AthleteRepository, UserRepository},
};
use uuid::Uuid;

use crate::features::tolerate;

/// List all athletes
pub async fn list_athletes(pool: &PgPool) -> Result<Vec<AthleteListItem>> {
    let rows = AthleteRepository::new(pool).list().await?;
    Ok(rows.into_iter().map(AthleteListItem::from).collect())
}

/// Build the profile page; only the athlete lookup itself may fail the request
pub async fn get_athlete_profile(pool: &PgPool, id: Uuid) -> Result<AthleteProfileResponse> {
    let athletes = AthleteRepository::new(pool);
    let users = UserRepository::new(pool);

    let athlete = athletes.find_by_id(id).await?;

    let details = tolerate(users.details(id).await, "athlete details");
    let achievements = tolerate(users.achievements(id).await, "achievements");
    let education = tolerate(users.education(id).await, "education");
    let stats = tolerate(athletes.stats(id).await, "athlete stats");

    Ok(AthleteProfileResponse::assemble(
        athlete,
        details,
        achievements,
        education,
        stats,
    ))
}
