use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::news::{
        ArticleResponse, DraftSavedResponse, DraftsResponse, NewsArticleResponse,
        NewsListResponse, PublishNewsRequest, PublishedResponse, SaveDraftRequest,
        SuccessResponse, UpdateNewsRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/news",
    responses(
        (status = 200, description = "Published articles, newest first", body = NewsListResponse)
    ),
    tag = "news"
)]
pub async fn list_news(State(db): State<Database>) -> Result<Response, WebError> {
    let articles = services::list_articles(db.pool()).await?;

    Ok(Json(NewsListResponse {
        success: true,
        articles,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(
        ("id" = Uuid, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "Article found", body = ArticleResponse),
        (status = 404, description = "Article not found")
    ),
    tag = "news"
)]
pub async fn get_news(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let article = services::get_article(db.pool(), id).await?;

    Ok(Json(ArticleResponse {
        success: true,
        message: None,
        article: NewsArticleResponse::from(article),
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/news/publish",
    request_body = PublishNewsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Article published", body = PublishedResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only organizers can publish"),
        (status = 404, description = "Author not found")
    ),
    tag = "news"
)]
pub async fn publish_news(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<PublishNewsRequest>,
) -> Result<Response, WebError> {
    user.ensure_organizer()?;
    user.ensure_self_or_admin(req.user_id)?;
    req.validate()?;

    let article = services::publish(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(PublishedResponse {
            success: true,
            message: "News published successfully".to_string(),
            news_id: article.news_id,
        }),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    params(
        ("id" = Uuid, Path, description = "Article id")
    ),
    request_body = UpdateNewsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Article updated", body = ArticleResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Article not found")
    ),
    tag = "news"
)]
pub async fn update_news(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNewsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let existing = services::get_article(db.pool(), id).await?;
    services::ensure_author(&user, &existing)?;

    let article = services::update_article(db.pool(), id, &req).await?;

    Ok(Json(ArticleResponse {
        success: true,
        message: Some("News updated successfully".to_string()),
        article: NewsArticleResponse::from(article),
    })
    .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    params(
        ("id" = Uuid, Path, description = "Article id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Article deleted", body = SuccessResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Article not found")
    ),
    tag = "news"
)]
pub async fn delete_news(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let existing = services::get_article(db.pool(), id).await?;
    services::ensure_author(&user, &existing)?;

    services::delete_article(db.pool(), id).await?;

    Ok(Json(SuccessResponse {
        success: true,
        message: "News deleted successfully".to_string(),
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/news/drafts/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "Draft owner")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Drafts, most recently modified first", body = DraftsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Drafts belong to another user")
    ),
    tag = "news"
)]
pub async fn list_drafts(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    user.ensure_self_or_admin(user_id)?;

    let drafts = services::list_drafts(db.pool(), user_id).await?;

    Ok(Json(DraftsResponse {
        success: true,
        drafts,
    })
    .into_response())
}

#[utoipa::path(
    post,
    path = "/api/news/drafts/save",
    request_body = SaveDraftRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Draft updated", body = DraftSavedResponse),
        (status = 201, description = "Draft created", body = DraftSavedResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Cannot save drafts for another user")
    ),
    tag = "news"
)]
pub async fn save_draft(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<SaveDraftRequest>,
) -> Result<Response, WebError> {
    user.ensure_self_or_admin(req.user_id)?;
    req.validate()?;

    let (draft, created) = services::save_draft(db.pool(), &req).await?;

    let (status, message) = if created {
        (StatusCode::CREATED, "Draft created successfully")
    } else {
        (StatusCode::OK, "Draft updated successfully")
    };

    Ok((
        status,
        Json(DraftSavedResponse {
            success: true,
            message: message.to_string(),
            draft_id: draft.draft_id,
        }),
    )
        .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/news/drafts/{draft_id}",
    params(
        ("draft_id" = Uuid, Path, description = "Draft id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Draft deleted", body = SuccessResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the draft owner"),
        (status = 404, description = "Draft not found")
    ),
    tag = "news"
)]
pub async fn delete_draft(
    State(db): State<Database>,
    Extension(user): Extension<AuthUser>,
    Path(draft_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let draft = services::get_draft(db.pool(), draft_id).await?;
    user.ensure_self_or_admin(draft.user_id)?;

    services::delete_draft(db.pool(), draft_id).await?;

    Ok(Json(SuccessResponse {
        success: true,
        message: "Draft deleted successfully".to_string(),
    })
    .into_response())
}
