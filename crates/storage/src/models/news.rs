use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NewsDraft {
    pub draft_id: Uuid,
    pub user_id: Uuid,
    pub title: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub last_modified: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct NewsArticle {
    pub news_id: Uuid,
    pub user_id: Option<Uuid>,
    pub author_name: String,
    pub title: String,
    pub event_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub content: String,
    pub category: Option<String>,
    pub publish_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl NewsArticle {
    pub fn read_time_minutes(&self) -> u32 {
        read_time_minutes(&self.content)
    }
}

/// Minutes to read `content` at 200 words per minute, never less than one.
pub fn read_time_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_time_rounds_up() {
        let content = vec!["word"; 201].join(" ");
        assert_eq!(read_time_minutes(&content), 2);
    }

    #[test]
    fn test_read_time_exact_multiple() {
        let content = vec!["word"; 400].join("\n");
        assert_eq!(read_time_minutes(&content), 2);
    }

    #[test]
    fn test_read_time_minimum_one_minute() {
        assert_eq!(read_time_minutes(""), 1);
        assert_eq!(read_time_minutes("   short  "), 1);
    }
}
