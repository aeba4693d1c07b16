pub mod athlete_stats;
pub mod athletes;
pub mod auth;
pub mod events;
pub mod follows;
pub mod news;
pub mod participants;
pub mod reviews;
pub mod search;
pub mod stats;
pub mod users;

use storage::error::StorageError;

/// Unwrap a secondary read of a composite response, logging and defaulting on failure.
pub(crate) fn tolerate<T: Default>(result: Result<T, StorageError>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load {what}, continuing without it");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerate_defaults_on_error() {
        let failed: Result<Vec<i32>, StorageError> = Err(StorageError::NotFound("Stats"));
        assert!(tolerate(failed, "stats").is_empty());
        assert_eq!(tolerate(Ok(vec![1, 2]), "stats"), vec![1, 2]);
    }
}
