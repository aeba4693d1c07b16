use sqlx::PgPool;
use storage::{
    dto::news::{NewsArticleResponse, PublishNewsRequest, SaveDraftRequest, UpdateNewsRequest},
    error::Result,
    models::{NewsArticle, NewsDraft},
    repository::NewsRepository,
};
use uuid::Uuid;

use crate::error::WebResult;
use crate::middleware::auth::AuthUser;

/// Articles without a surviving author can only be managed by admins.
pub fn ensure_author(user: &AuthUser, article: &NewsArticle) -> WebResult<()> {
    match article.user_id {
        Some(author_id) => user.ensure_self_or_admin(author_id),
        None => user.ensure_admin(),
    }
}

pub async fn list_articles(pool: &PgPool) -> Result<Vec<NewsArticleResponse>> {
    let articles = NewsRepository::new(pool).list().await?;
    Ok(articles.into_iter().map(NewsArticleResponse::from).collect())
}

pub async fn get_article(pool: &PgPool, id: Uuid) -> Result<NewsArticle> {
    NewsRepository::new(pool).find_by_id(id).await
}

pub async fn publish(pool: &PgPool, req: &PublishNewsRequest) -> Result<NewsArticle> {
    let article = NewsRepository::new(pool).publish(req).await?;

    tracing::info!(news_id = %article.news_id, author = %article.author_name, "News published");

    Ok(article)
}

pub async fn update_article(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateNewsRequest,
) -> Result<NewsArticle> {
    NewsRepository::new(pool).update(id, req).await
}

pub async fn delete_article(pool: &PgPool, id: Uuid) -> Result<()> {
    NewsRepository::new(pool).delete(id).await?;

    tracing::info!(news_id = %id, "News deleted");

    Ok(())
}

pub async fn list_drafts(pool: &PgPool, user_id: Uuid) -> Result<Vec<NewsDraft>> {
    NewsRepository::new(pool).drafts_for_user(user_id).await
}

pub async fn save_draft(pool: &PgPool, req: &SaveDraftRequest) -> Result<(NewsDraft, bool)> {
    NewsRepository::new(pool).save_draft(req).await
}

pub async fn get_draft(pool: &PgPool, draft_id: Uuid) -> Result<NewsDraft> {
    NewsRepository::new(pool).find_draft(draft_id).await
}

pub async fn delete_draft(pool: &PgPool, draft_id: Uuid) -> Result<()> {
    NewsRepository::new(pool).delete_draft(draft_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::models::UserRole;

    fn article(author: Option<Uuid>) -> NewsArticle {
        let now = chrono::Utc::now().naive_utc();
        NewsArticle {
            news_id: Uuid::new_v4(),
            user_id: author,
            author_name: "Olga".to_string(),
            title: "Finals recap".to_string(),
            event_date: None,
            location: None,
            content: "Short".to_string(),
            category: None,
            publish_date: now,
            created_at: now,
        }
    }

    #[test]
    fn test_orphaned_article_needs_admin() {
        let organizer = AuthUser {
            user_id: Uuid::new_v4(),
            role: UserRole::Organizer,
        };
        let admin = AuthUser {
            user_id: Uuid::new_v4(),
            role: UserRole::Admin,
        };

        assert!(ensure_author(&organizer, &article(None)).is_err());
        assert!(ensure_author(&admin, &article(None)).is_ok());
        assert!(ensure_author(&organizer, &article(Some(organizer.user_id))).is_ok());
    }
}
