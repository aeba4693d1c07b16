use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use storage::models::UserRole;
use uuid::Uuid;

use crate::error::WebError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: String,
    pub exp: i64,
}

/// Signing and verification keys for session tokens
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: chrono::Duration,
}

impl AuthKeys {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: chrono::Duration::hours(ttl_hours),
        }
    }

    pub fn issue(&self, user_id: Uuid, role: UserRole) -> Result<String, WebError> {
        let claims = Claims {
            sub: user_id,
            role: role.as_str().to_string(),
            exp: (chrono::Utc::now() + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| WebError::InternalServerError(format!("Failed to sign token: {e}")))
    }

    pub fn verify(&self, token: &str) -> Result<AuthUser, WebError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| WebError::Unauthorized("Invalid or expired token".to_string()))?;

        let role = UserRole::parse(&data.claims.role)
            .ok_or_else(|| WebError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthUser {
            user_id: data.claims.sub,
            role,
        })
    }
}

/// Identity of the caller, placed in request extensions by [`require_auth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn ensure_admin(&self) -> Result<(), WebError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(WebError::Forbidden("Admin access required".to_string()))
        }
    }

    /// The caller must be `owner_id`, unless they are an admin.
    pub fn ensure_self_or_admin(&self, owner_id: Uuid) -> Result<(), WebError> {
        if self.user_id == owner_id || self.is_admin() {
            Ok(())
        } else {
            Err(WebError::Forbidden(
                "You are not allowed to act on behalf of this user".to_string(),
            ))
        }
    }

    pub fn ensure_organizer(&self) -> Result<(), WebError> {
        if self.role.can_organize() {
            Ok(())
        } else {
            Err(WebError::Forbidden(
                "Only organizers can perform this action".to_string(),
            ))
        }
    }
}

pub async fn require_auth(
    State(keys): State<AuthKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .ok_or_else(|| WebError::Unauthorized("Missing bearer token".to_string()))?;

    let user = keys.verify(token.trim()).inspect_err(|_| {
        tracing::warn!("Rejected invalid bearer token");
    })?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let keys = AuthKeys::new("test-secret", 1);
        let user_id = Uuid::new_v4();

        let token = keys.issue(user_id, UserRole::Organizer).unwrap();
        let user = keys.verify(&token).unwrap();

        assert_eq!(user.user_id, user_id);
        assert_eq!(user.role, UserRole::Organizer);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = AuthKeys::new("one", 1)
            .issue(Uuid::new_v4(), UserRole::Athlete)
            .unwrap();

        assert!(matches!(
            AuthKeys::new("two", 1).verify(&token),
            Err(WebError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = AuthKeys::new("test-secret", -2);
        let token = keys.issue(Uuid::new_v4(), UserRole::Athlete).unwrap();

        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_ownership_rules() {
        let owner = Uuid::new_v4();
        let athlete = AuthUser {
            user_id: owner,
            role: UserRole::Athlete,
        };
        let admin = AuthUser {
            user_id: Uuid::new_v4(),
            role: UserRole::Admin,
        };
        let stranger = AuthUser {
            user_id: Uuid::new_v4(),
            role: UserRole::Scout,
        };

        assert!(athlete.ensure_self_or_admin(owner).is_ok());
        assert!(admin.ensure_self_or_admin(owner).is_ok());
        assert!(stranger.ensure_self_or_admin(owner).is_err());
        assert!(stranger.ensure_admin().is_err());
        assert!(athlete.ensure_organizer().is_err());
        assert!(admin.ensure_organizer().is_ok());
    }
}
