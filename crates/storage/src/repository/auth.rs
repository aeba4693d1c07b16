use chrono::Duration;
use sqlx::PgPool;
use uuid::Uuid;

use super::user::user_columns;
use crate::dto::auth::RegisterRequest;
use crate::error::{Result, StorageError};
use crate::models::{PasswordResetToken, User, UserCredentials};

const DUPLICATE_EMAIL: &str = "This email is already associated with an account.";

/// Accounts, password hashes and reset tokens
pub struct AuthRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AuthRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create the profile row and its credentials together
    pub async fn register(&self, req: &RegisterRequest, password_hash: &str) -> Result<User> {
        let mut tx = self.pool.begin().await?;

        let sport_name = match req.sport {
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
            INSERT INTO users (fullname, role, sport_id, sport_name, birthdate, gender, location, bio)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING "#,
            user_columns!()
        ))
        .bind(req.name.trim())
        .bind(&req.role)
        .bind(req.sport)
        .bind(sport_name)
        .bind(req.birth_date)
        .bind(&req.gender)
        .bind(&req.region)
        .bind(&req.bio)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO user_credentials (user_id, email, password_hash) VALUES ($1, $2, $3)",
        )
        .bind(user.user_id)
        .bind(req.email.trim())
        .bind(password_hash)
        .execute(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).classify(DUPLICATE_EMAIL, "Unknown user"))?;

        tx.commit().await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT user_id, email, password_hash FROM user_credentials WHERE lower(email) = lower($1)",
        )
        .bind(email.trim())
        .fetch_optional(self.pool)
        .await?;

        Ok(credentials)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserCredentials>> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT user_id, email, password_hash FROM user_credentials WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(credentials)
    }

    pub async fn update_password(&self, user_id: Uuid, password_hash: &str) -> Result<()> {
        let result =
            sqlx::query("UPDATE user_credentials SET password_hash = $2 WHERE user_id = $1")
                .bind(user_id)
                .bind(password_hash)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("User"));
        }

        Ok(())
    }

    /// Issue a single-use reset token valid for `ttl`
    pub async fn create_reset_token(
        &self,
        user_id: Uuid,
        ttl: Duration,
    ) -> Result<PasswordResetToken> {
        let expires_at = chrono::Utc::now().naive_utc() + ttl;

        let token = sqlx::query_as::<_, PasswordResetToken>(
            r#"
            INSERT INTO password_reset_tokens (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING token, user_id, expires_at, used_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(self.pool)
        .await?;

        Ok(token)
    }

    /// Spend a reset token and store the new hash; unknown, used or expired
    /// tokens are rejected without touching the credentials.
    pub async fn consume_reset_token(&self, token: Uuid, password_hash: &str) -> Result<Uuid> {
        let mut tx = self.pool.begin().await?;

        let user_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE password_reset_tokens
            SET used_at = now() AT TIME ZONE 'utc'
            WHERE token = $1 AND used_at IS NULL AND expires_at > now() AT TIME ZONE 'utc'
            RETURNING user_id
            "#,
        )
        .bind(token)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            StorageError::InvalidInput("Reset token is invalid or has expired".to_string())
        })?;

        sqlx::query("UPDATE user_credentials SET password_hash = $2 WHERE user_id = $1")
            .bind(user_id)
            .bind(password_hash)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(user_id)
    }
}
