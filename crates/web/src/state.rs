use axum::extract::FromRef;
use storage::Database;
use uuid::Uuid;

use crate::middleware::auth::AuthKeys;

/// Builds links into the single-page frontend
#[derive(Debug, Clone)]
pub struct FrontendLinks {
    base_url: String,
}

impl FrontendLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn reset_password(&self, token: Uuid) -> String {
        format!("{}/reset-password?token={}", self.base_url, token)
    }
}

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: Database,
    pub auth: AuthKeys,
    pub links: FrontendLinks,
}
