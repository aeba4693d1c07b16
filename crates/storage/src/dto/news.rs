use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_not_blank;
use crate::models::{NewsArticle, NewsDraft};

/// Request payload for creating or updating a draft; an absent `draft_id` creates one
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveDraftRequest {
    pub draft_id: Option<Uuid>,

    pub user_id: Uuid,

    #[validate(length(max = 255))]
    pub title: Option<String>,

    pub event_date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[validate(length(max = 50000))]
    pub content: Option<String>,

    #[validate(length(max = 100))]
    pub category: Option<String>,
}

/// Request payload for publishing an article
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PublishNewsRequest {
    pub user_id: Uuid,

    /// Draft consumed by this publication, deleted once the article exists
    pub draft_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    #[validate(custom(function = "validate_not_blank", message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = 50000, message = "Content is required"))]
    #[validate(custom(function = "validate_not_blank", message = "Content is required"))]
    pub content: String,

    #[validate(length(max = 100))]
    pub category: Option<String>,

    pub event_date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub location: Option<String>,
}

/// Request payload for editing a published article
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNewsRequest {
    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 50000))]
    pub content: Option<String>,

    #[validate(length(max = 100))]
    pub category: Option<String>,

    pub event_date: Option<NaiveDate>,

    #[validate(length(max = 255))]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsArticleResponse {
    #[serde(flatten)]
    pub article: NewsArticle,
    pub read_time_minutes: u32,
}

impl From<NewsArticle> for NewsArticleResponse {
    fn from(article: NewsArticle) -> Self {
        Self {
            read_time_minutes: article.read_time_minutes(),
            article,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsListResponse {
    pub success: bool,
    pub articles: Vec<NewsArticleResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub article: NewsArticleResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublishedResponse {
    pub success: bool,
    pub message: String,
    pub news_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DraftsResponse {
    pub success: bool,
    pub drafts: Vec<NewsDraft>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DraftSavedResponse {
    pub success: bool,
    pub message: String,
    pub draft_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}
