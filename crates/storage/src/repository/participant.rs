use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{EventParticipant, ParticipantWithUser};

pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a participant; the composite key rejects a second join
    pub async fn join(&self, event_id: Uuid, user_id: Uuid) -> Result<EventParticipant> {
        let participant = sqlx::query_as::<_, EventParticipant>(
            r#"
            INSERT INTO event_participants (event_id, user_id)
            VALUES ($1, $2)
            RETURNING event_id, user_id, joined_at
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            StorageError::from(e).classify("Already joined this event", "Unknown event or user")
        })?;

        Ok(participant)
    }

    pub async fn leave(&self, event_id: Uuid, user_id: Uuid) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM event_participants WHERE event_id = $1 AND user_id = $2")
                .bind(event_id)
                .bind(user_id)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Participation"));
        }

        Ok(())
    }

    /// Roster in join order
    pub async fn list(&self, event_id: Uuid) -> Result<Vec<ParticipantWithUser>> {
        let participants = sqlx::query_as::<_, ParticipantWithUser>(
            r#"
            SELECT p.user_id, p.joined_at, u.fullname, u.sport_name, u.location, u.birthdate
            FROM event_participants p
            JOIN users u ON u.user_id = p.user_id
            WHERE p.event_id = $1
            ORDER BY p.joined_at ASC, u.fullname ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    pub async fn count(&self, event_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM event_participants WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    pub async fn has_joined(&self, event_id: Uuid, user_id: Uuid) -> Result<bool> {
        let joined = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM event_participants WHERE event_id = $1 AND user_id = $2)",
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(joined)
    }
}
