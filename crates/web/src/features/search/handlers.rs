use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::search::{SearchQuery, SearchResult},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Up to five users and five events matching the term", body = Vec<SearchResult>)
    ),
    tag = "search"
)]
pub async fn search(
    State(db): State<Database>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, WebError> {
    let Some(term) = query.term() else {
        return Ok(Json(Vec::<SearchResult>::new()).into_response());
    };

    let results = services::search(db.pool(), term).await;

    Ok(Json(results).into_response())
}
