use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::search::{SEARCH_LIMIT, SearchResult, like_pattern};
use crate::error::Result;

#[derive(FromRow)]
struct UserHit {
    user_id: Uuid,
    fullname: String,
    sport_name: Option<String>,
    role: String,
}

#[derive(FromRow)]
struct EventHit {
    event_id: Uuid,
    title: String,
    sport_name: Option<String>,
    start_datetime: chrono::NaiveDateTime,
}

pub struct SearchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SearchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Users whose name or sport contains `term`, case-insensitively
    pub async fn users(&self, term: &str) -> Result<Vec<SearchResult>> {
        let hits = sqlx::query_as::<_, UserHit>(
            r#"
            SELECT user_id, fullname, sport_name, role
            FROM users
            WHERE fullname ILIKE $1 ESCAPE '\' OR sport_name ILIKE $1 ESCAPE '\'
            ORDER BY fullname
            LIMIT $2
            "#,
        )
        .bind(like_pattern(term))
        .bind(SEARCH_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(hits
            .into_iter()
            .map(|hit| SearchResult::User {
                id: hit.user_id,
                name: hit.fullname,
                sport: hit.sport_name,
                role: hit.role,
            })
            .collect())
    }

    /// Events whose title or sport contains `term`, case-insensitively
    pub async fn events(&self, term: &str) -> Result<Vec<SearchResult>> {
        let hits = sqlx::query_as::<_, EventHit>(
            r#"
            SELECT event_id, title, sport_name, start_datetime
            FROM events
            WHERE title ILIKE $1 ESCAPE '\' OR sport_name ILIKE $1 ESCAPE '\'
            ORDER BY start_datetime
            LIMIT $2
            "#,
        )
        .bind(like_pattern(term))
        .bind(SEARCH_LIMIT)
        .fetch_all(self.pool)
        .await?;

        Ok(hits
            .into_iter()
            .map(|hit| SearchResult::Event {
                id: hit.event_id,
                name: hit.title,
                sport: hit.sport_name,
                date: hit.start_datetime,
            })
            .collect())
    }
}
