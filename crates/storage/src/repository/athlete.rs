use sqlx::PgPool;
use uuid::Uuid;

use super::user::user_columns;
use crate::dto::athlete::{AthleteListRow, UpsertStatsRequest};
use crate::error::{Result, StorageError};
use crate::models::{AthleteStats, User};

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all athletes with their details, stats and achievement count
    pub async fn list(&self) -> Result<Vec<AthleteListRow>> {
        let athletes = sqlx::query_as::<_, AthleteListRow>(
            r#"
            SELECT u.user_id, u.fullname, u.sport_name, u.birthdate, u.gender, u.location,
                   u.verification_status,
                   d.position, d.height_cm, d.weight_kg, d.avatar_url,
                   s.ppg, s.rpg, s.apg,
                   (SELECT COUNT(*) FROM achievements a WHERE a.user_id = u.user_id) AS achievement_count
            FROM users u
            LEFT JOIN user_details d ON d.user_id = u.user_id
            LEFT JOIN athlete_stats s ON s.user_id = u.user_id
            WHERE u.role = 'athlete'
            ORDER BY u.fullname
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find a user that holds the athlete role
    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>(concat!(
            "SELECT ",
            user_columns!(),
            " FROM users WHERE user_id = $1 AND role = 'athlete'"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Athlete"))
    }

    pub async fn stats(&self, id: Uuid) -> Result<Option<AthleteStats>> {
        let stats = sqlx::query_as::<_, AthleteStats>(
            "SELECT user_id, ppg, rpg, apg, updated_at FROM athlete_stats WHERE user_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(stats)
    }

    pub async fn list_stats(&self) -> Result<Vec<AthleteStats>> {
        let stats = sqlx::query_as::<_, AthleteStats>(
            "SELECT user_id, ppg, rpg, apg, updated_at FROM athlete_stats ORDER BY user_id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(stats)
    }

    /// Insert or overwrite the single stats row for an athlete
    pub async fn upsert_stats(&self, id: Uuid, req: &UpsertStatsRequest) -> Result<AthleteStats> {
        // Make sure the target exists and is an athlete before writing.
        self.find_by_id(id).await?;

        let stats = sqlx::query_as::<_, AthleteStats>(
            r#"
            INSERT INTO athlete_stats (user_id, ppg, rpg, apg, updated_at)
            VALUES ($1, $2, $3, $4, now())
            ON CONFLICT (user_id) DO UPDATE
            SET ppg = EXCLUDED.ppg,
                rpg = EXCLUDED.rpg,
                apg = EXCLUDED.apg,
                updated_at = EXCLUDED.updated_at
            RETURNING user_id, ppg, rpg, apg, updated_at
            "#,
        )
        .bind(id)
        .bind(req.ppg.unwrap_or_default())
        .bind(req.rpg.unwrap_or_default())
        .bind(req.apg.unwrap_or_default())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match StorageError::from(e) {
            err if err.is_foreign_key_violation() => StorageError::NotFound("Athlete"),
            err => err,
        })?;

        Ok(stats)
    }
}
