use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Translate unique and foreign-key violations into the typed variants
    /// the web layer maps to 409 and 400. Anything else passes through.
    pub fn classify(self, conflict: &str, reference: &str) -> Self {
        if self.is_unique_violation() {
            StorageError::ConstraintViolation(conflict.to_string())
        } else if self.is_foreign_key_violation() {
            StorageError::InvalidReference(reference.to_string())
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_entity() {
        assert_eq!(StorageError::NotFound("Event").to_string(), "Event not found");
    }

    #[test]
    fn test_classify_leaves_other_errors_alone() {
        let err = StorageError::NotFound("User").classify("dup", "missing");
        assert!(matches!(err, StorageError::NotFound("User")));

        let err = StorageError::Database(sqlx::Error::RowNotFound).classify("dup", "missing");
        assert!(matches!(err, StorageError::Database(sqlx::Error::RowNotFound)));
    }
}
