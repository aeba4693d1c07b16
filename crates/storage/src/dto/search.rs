use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Results returned per entity kind
pub const SEARCH_LIMIT: i64 = 5;

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    pub q: Option<String>,
}

impl SearchQuery {
    /// Trimmed search term, `None` when there is nothing to search for.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    User {
        id: Uuid,
        name: String,
        sport: Option<String>,
        role: String,
    },
    Event {
        id: Uuid,
        name: String,
        sport: Option<String>,
        date: chrono::NaiveDateTime,
    },
}

/// Wrap `term` for ILIKE, escaping the pattern metacharacters it contains.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
