use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user::UpdateSettingsRequest;
use crate::error::{Result, StorageError};
use crate::models::{Achievement, Education, Sport, User, UserDetails};

macro_rules! user_columns {
    () => {
        "user_id, fullname, role, sport_id, sport_name, birthdate, gender, location, bio, \
         verification_status, registration_date"
    };
}
pub(crate) use user_columns;

const DETAIL_COLUMNS: &str = "user_id, height_cm, weight_kg, position, jersey_number, \
                              contact_num, email, video_url, avatar_url";

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users, newest registrations first
    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(concat!(
            "SELECT ",
            user_columns!(),
            " FROM users ORDER BY registration_date DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>(concat!(
            "SELECT ",
            user_columns!(),
            " FROM users WHERE user_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("User"))
    }

    pub async fn details(&self, id: Uuid) -> Result<Option<UserDetails>> {
        let details = sqlx::query_as::<_, UserDetails>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM user_details WHERE user_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(details)
    }

    pub async fn achievements(&self, id: Uuid) -> Result<Vec<Achievement>> {
        let achievements = sqlx::query_as::<_, Achievement>(
            r#"
            SELECT achievement_id, user_id, title, year, description, created_at
            FROM achievements
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(achievements)
    }

    pub async fn education(&self, id: Uuid) -> Result<Vec<Education>> {
        let education = sqlx::query_as::<_, Education>(
            r#"
            SELECT education_id, user_id, school, degree, field, end_year
            FROM education
            WHERE user_id = $1
            ORDER BY end_year DESC NULLS LAST
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(education)
    }

    pub async fn set_verification_status(&self, id: Uuid, status: &str) -> Result<User> {
        sqlx::query_as::<_, User>(concat!(
            "UPDATE users SET verification_status = $2 WHERE user_id = $1 RETURNING ",
            user_columns!()
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("User"))
    }

    /// Delete a user together with everything that references it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("User"));
        }

        Ok(())
    }

    /// Patch profile columns and upsert the details row in one transaction
    pub async fn update_settings(
        &self,
        id: Uuid,
        req: &UpdateSettingsRequest,
    ) -> Result<(User, UserDetails)> {
        let mut tx = self.pool.begin().await?;

        let sport_name = match req.sport_id {
            Some(sport_id) => Some(
                sqlx::query_scalar::<_, String>(
                    "SELECT sport_name FROM sports WHERE sport_id = $1",
                )
                .bind(sport_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| StorageError::InvalidReference("Unknown sport".to_string()))?,
            ),
            None => None,
        };

        let user = sqlx::query_as::<_, User>(concat!(
            r#"
            UPDATE users
            SET fullname = COALESCE($2, fullname),
                sport_id = COALESCE($3, sport_id),
                sport_name = COALESCE($4, sport_name),
                birthdate = COALESCE($5, birthdate),
                gender = COALESCE($6, gender),
                location = COALESCE($7, location),
                bio = COALESCE($8, bio)
            WHERE user_id = $1
            RETURNING "#,
            user_columns!()
        ))
        .bind(id)
        .bind(req.fullname.as_deref().map(str::trim))
        .bind(req.sport_id)
        .bind(sport_name)
        .bind(req.birthdate)
        .bind(&req.gender)
        .bind(&req.location)
        .bind(&req.bio)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound("User"))?;

        let details = sqlx::query_as::<_, UserDetails>(&format!(
            r#"
            INSERT INTO user_details (
                user_id, height_cm, weight_kg, position, jersey_number,
                contact_num, email, video_url, avatar_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id) DO UPDATE
            SET height_cm = COALESCE(EXCLUDED.height_cm, user_details.height_cm),
                weight_kg = COALESCE(EXCLUDED.weight_kg, user_details.weight_kg),
                position = COALESCE(EXCLUDED.position, user_details.position),
                jersey_number = COALESCE(EXCLUDED.jersey_number, user_details.jersey_number),
                contact_num = COALESCE(EXCLUDED.contact_num, user_details.contact_num),
                email = COALESCE(EXCLUDED.email, user_details.email),
                video_url = COALESCE(EXCLUDED.video_url, user_details.video_url),
                avatar_url = COALESCE(EXCLUDED.avatar_url, user_details.avatar_url)
            RETURNING {DETAIL_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(req.height_cm)
        .bind(req.weight_kg)
        .bind(&req.position)
        .bind(req.jersey_number)
        .bind(&req.contact_num)
        .bind(&req.email)
        .bind(&req.video_url)
        .bind(&req.avatar_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((user, details))
    }

    pub async fn list_sports(&self) -> Result<Vec<Sport>> {
        let sports =
            sqlx::query_as::<_, Sport>("SELECT sport_id, sport_name FROM sports ORDER BY sport_name")
                .fetch_all(self.pool)
                .await?;

        Ok(sports)
    }
}
