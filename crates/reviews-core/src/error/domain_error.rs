//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid characteristic id: {0}")]
    InvalidCharacteristicId(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCharacteristicId(_) => "INVALID_CHARACTERISTIC_ID",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCharacteristicId(_))
    }

    /// HTTP status code this error maps to
    pub fn status_code(&self) -> u16 {
        if self.is_validation() {
            400
        } else {
            500
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::InvalidCharacteristicId("abc".to_string());
        assert_eq!(err.code(), "INVALID_CHARACTERISTIC_ID");

        let err = DomainError::DatabaseError("connection reset".to_string());
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::InvalidCharacteristicId("x".to_string()).status_code(), 400);
        assert_eq!(DomainError::DatabaseError("x".to_string()).status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidCharacteristicId("fit".to_string());
        assert_eq!(err.to_string(), "Invalid characteristic id: fit");
    }
}
