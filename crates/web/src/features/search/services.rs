use sqlx::PgPool;
use storage::{dto::search::SearchResult, repository::SearchRepository};

/// Users first, then events; a failing group is logged and left out.
pub async fn search(pool: &PgPool, term: &str) -> Vec<SearchResult> {
    let repo = SearchRepository::new(pool);
    let mut results = Vec::new();

    match repo.users(term).await {
        Ok(users) => results.extend(users),
        Err(e) => tracing::warn!(error = %e, "User search failed"),
    }

    match repo.events(term).await {
        Ok(events) => results.extend(events),
        Err(e) => tracing::warn!(error = %e, "Event search failed"),
    }

    results
}
