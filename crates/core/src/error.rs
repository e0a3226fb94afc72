//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Raised while loading and validating static data. A region that does not
/// exist is *not* an error; lookups model that as a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The static data could not be parsed into the expected shape.
    #[error("failed to parse catalog data: {0}")]
    Parse(String),

    /// A record failed validation (e.g. a blank field that must be set).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An identifier appeared more than once where it must be unique.
    #[error("duplicate identifier: {0}")]
    DuplicateId(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_id(msg: impl Into<String>) -> Self {
        Self::DuplicateId(msg.into())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_parse_errors() {
        let err: CatalogError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        match err {
            CatalogError::Parse(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn display_includes_context() {
        let err = CatalogError::duplicate_id("region 'kerala'");
        assert_eq!(err.to_string(), "duplicate identifier: region 'kerala'");
    }
}
