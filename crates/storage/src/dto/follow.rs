use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FollowRequest {
    pub follower_id: Uuid,
    pub following_id: Uuid,
}

impl FollowRequest {
    pub fn validate_distinct(&self) -> Result<(), &'static str> {
        if self.follower_id == self.following_id {
            return Err("Cannot follow yourself");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IsFollowingQuery {
    pub follower_id: Uuid,
    pub following_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IsFollowingResponse {
    #[serde(rename = "isFollowing")]
    pub is_following: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_follow_rejected() {
        let id = Uuid::new_v4();
        let req = FollowRequest {
            follower_id: id,
            following_id: id,
        };
        assert_eq!(req.validate_distinct(), Err("Cannot follow yourself"));
    }

    #[test]
    fn test_distinct_follow_accepted() {
        let req = FollowRequest {
            follower_id: Uuid::new_v4(),
            following_id: Uuid::new_v4(),
        };
        assert!(req.validate_distinct().is_ok());
    }
}
