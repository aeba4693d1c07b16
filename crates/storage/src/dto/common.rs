use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    pub count: i64,
}

/// Trim each name, drop blanks, and collapse case-insensitive repeats while
/// keeping the first spelling seen.
pub fn normalize_names(names: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Concatenate id lists, dropping repeats and keeping first-seen order.
pub fn merge_ids(existing: &[i32], created: &[i32]) -> Vec<i32> {
    let mut seen = std::collections::HashSet::new();
    existing
        .iter()
        .chain(created)
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_names_trims_and_dedups() {
        let names = vec![
            " Esports ".to_string(),
            "esports".to_string(),
            "".to_string(),
            "   ".to_string(),
            "5K Run".to_string(),
        ];
        assert_eq!(normalize_names(&names), vec!["Esports", "5K Run"]);
    }

    #[test]
    fn test_merge_ids_keeps_first_seen_order() {
        assert_eq!(merge_ids(&[3, 1, 3], &[2, 1, 4]), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_merge_ids_empty() {
        assert!(merge_ids(&[], &[]).is_empty());
    }
}
