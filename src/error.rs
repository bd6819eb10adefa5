use serde::Serialize;
use thiserror::Error;

/// Everything that can stop a recommendation request from producing results.
///
/// The `Display` output is the client-facing message placed in the error body.
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("DATABASE_URL not configured")]
    Configuration,

    #[error("invalid limit '{raw}': {reason}")]
    InvalidLimit { raw: String, reason: String },

    #[error("{0}")]
    Database(String),

    #[error("failed to read course row: {0}")]
    RowMapping(String),

    #[error("failed to serialize response: {0}")]
    Serialization(String),
}

/// `{"error": "<message>"}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl RecommendError {
    pub fn invalid_limit(raw: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidLimit {
            raw: raw.into(),
            reason: reason.to_string(),
        }
    }

    /// Every failure surfaces as a server error.
    pub fn status_code(&self) -> u16 {
        500
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }

    /// Logs the failure at a level matching its cause.
    pub fn log(&self) {
        match self {
            RecommendError::Configuration => {
                tracing::error!("Recommendation store is not configured: {}", self);
            }
            RecommendError::InvalidLimit { raw, reason } => {
                tracing::warn!("Rejected limit parameter {:?}: {}", raw, reason);
            }
            RecommendError::Database(err) => {
                if err.contains("connection") {
                    tracing::error!("PostgreSQL connection issue: {}", err);
                } else {
                    tracing::error!("PostgreSQL query error: {}", err);
                }
            }
            RecommendError::RowMapping(err) => {
                tracing::error!("Course row mapping failed: {}", err);
            }
            RecommendError::Serialization(err) => {
                tracing::error!("Response serialization failed: {}", err);
            }
        }
    }
}

impl From<tokio_postgres::Error> for RecommendError {
    fn from(err: tokio_postgres::Error) -> Self {
        // Prefer the server-reported message; fall back to the client-side description.
        match err.as_db_error() {
            Some(db_err) => RecommendError::Database(db_err.message().to_string()),
            None => RecommendError::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RecommendError {
    fn from(err: serde_json::Error) -> Self {
        RecommendError::Serialization(err.to_string())
    }
}

pub type RecommendResult<T> = Result<T, RecommendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_message() {
        let err = RecommendError::Configuration;
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            serde_json::to_string(&err.to_body()).unwrap(),
            r#"{"error":"DATABASE_URL not configured"}"#
        );
    }

    #[test]
    fn test_invalid_limit_message() {
        let reason = "abc".parse::<i64>().unwrap_err();
        let err = RecommendError::invalid_limit("abc", reason);
        assert_eq!(err.to_string(), "invalid limit 'abc': invalid digit found in string");
    }

    #[test]
    fn test_database_error_is_stringified_verbatim() {
        let err = RecommendError::Database("relation \"courses\" does not exist".to_string());
        assert_eq!(err.to_body().error, "relation \"courses\" does not exist");
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RecommendError = serde_err.into();
        assert!(matches!(err, RecommendError::Serialization(_)));
        assert!(err.to_string().starts_with("failed to serialize response"));
    }
}
