use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::news::{PublishNewsRequest, SaveDraftRequest, UpdateNewsRequest};
use crate::error::{Result, StorageError};
use crate::models::{NewsArticle, NewsDraft};

const DRAFT_COLUMNS: &str =
    "draft_id, user_id, title, event_date, location, content, category, last_modified";

const ARTICLE_COLUMNS: &str = "news_id, user_id, author_name, title, event_date, location, \
                               content, category, publish_date, created_at";

pub struct NewsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NewsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn drafts_for_user(&self, user_id: Uuid) -> Result<Vec<NewsDraft>> {
        let drafts = sqlx::query_as::<_, NewsDraft>(&format!(
            "SELECT {DRAFT_COLUMNS} FROM news_drafts WHERE user_id = $1 ORDER BY last_modified DESC"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(drafts)
    }

    pub async fn find_draft(&self, draft_id: Uuid) -> Result<NewsDraft> {
        sqlx::query_as::<_, NewsDraft>(&format!(
            "SELECT {DRAFT_COLUMNS} FROM news_drafts WHERE draft_id = $1"
        ))
        .bind(draft_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Draft"))
    }

    /// Update the caller's draft when `draft_id` names one they own, insert otherwise.
    /// The flag is true when a new row was created.
    pub async fn save_draft(&self, req: &SaveDraftRequest) -> Result<(NewsDraft, bool)> {
        if let Some(draft_id) = req.draft_id {
            let updated = sqlx::query_as::<_, NewsDraft>(&format!(
                r#"
                UPDATE news_drafts
                SET title = $3, event_date = $4, location = $5, content = $6, category = $7,
                    last_modified = now()
                WHERE draft_id = $1 AND user_id = $2
                RETURNING {DRAFT_COLUMNS}
                "#
            ))
            .bind(draft_id)
            .bind(req.user_id)
            .bind(&req.title)
            .bind(req.event_date)
            .bind(&req.location)
            .bind(&req.content)
            .bind(&req.category)
            .fetch_optional(self.pool)
            .await?;

            if let Some(draft) = updated {
                return Ok((draft, false));
            }
        }

        let draft = sqlx::query_as::<_, NewsDraft>(&format!(
            r#"
            INSERT INTO news_drafts (user_id, title, event_date, location, content, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {DRAFT_COLUMNS}
            "#
        ))
        .bind(req.user_id)
        .bind(&req.title)
        .bind(req.event_date)
        .bind(&req.location)
        .bind(&req.content)
        .bind(&req.category)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).classify("Draft already exists", "Unknown user"))?;

        Ok((draft, true))
    }

    pub async fn delete_draft(&self, draft_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM news_drafts WHERE draft_id = $1")
            .bind(draft_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Draft"));
        }

        Ok(())
    }

    /// Insert a published article under the author's current name and drop the
    /// draft it came from, both in one transaction.
    pub async fn publish(&self, req: &PublishNewsRequest) -> Result<NewsArticle> {
        let mut tx = self.pool.begin().await?;

        let author_name =
            sqlx::query_scalar::<_, String>("SELECT fullname FROM users WHERE user_id = $1")
                .bind(req.user_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(StorageError::NotFound("User"))?;

        let article = sqlx::query_as::<_, NewsArticle>(&format!(
            r#"
            INSERT INTO news_published
                (user_id, author_name, title, event_date, location, content, category)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ARTICLE_COLUMNS}
            "#
        ))
        .bind(req.user_id)
        .bind(&author_name)
        .bind(req.title.trim())
        .bind(req.event_date)
        .bind(&req.location)
        .bind(&req.content)
        .bind(&req.category)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(draft_id) = req.draft_id {
            sqlx::query("DELETE FROM news_drafts WHERE draft_id = $1 AND user_id = $2")
                .bind(draft_id)
                .bind(req.user_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::debug!(news_id = %article.news_id, "Published article");

        Ok(article)
    }

    /// Published articles, newest first
    pub async fn list(&self) -> Result<Vec<NewsArticle>> {
        let articles = sqlx::query_as::<_, NewsArticle>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM news_published ORDER BY publish_date DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(articles)
    }

    pub async fn find_by_id(&self, news_id: Uuid) -> Result<NewsArticle> {
        sqlx::query_as::<_, NewsArticle>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM news_published WHERE news_id = $1"
        ))
        .bind(news_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("News article"))
    }

    pub async fn update(&self, news_id: Uuid, req: &UpdateNewsRequest) -> Result<NewsArticle> {
        sqlx::query_as::<_, NewsArticle>(&format!(
            r#"
            UPDATE news_published
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                category = COALESCE($4, category),
                event_date = COALESCE($5, event_date),
                location = COALESCE($6, location)
            WHERE news_id = $1
            RETURNING {ARTICLE_COLUMNS}
            "#
        ))
        .bind(news_id)
        .bind(req.title.as_deref().map(str::trim))
        .bind(&req.content)
        .bind(&req.category)
        .bind(req.event_date)
        .bind(&req.location)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("News article"))
    }

    pub async fn delete(&self, news_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM news_published WHERE news_id = $1")
            .bind(news_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("News article"));
        }

        Ok(())
    }
}
