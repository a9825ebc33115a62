//! Error types for content loading.

use thiserror::Error;

/// Result alias for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Primary error type for content loading.
#[derive(Debug, Error)]
pub enum ContentError {
    /// An embedded fixture did not match its model.
    #[error("content fixture could not be parsed")]
    Parse {
        /// File name of the fixture under `data/`.
        fixture: &'static str,
        /// Underlying JSON error with line/column information.
        #[source]
        source: serde_json::Error,
    },
}

impl ContentError {
    /// Fixture associated with the error.
    #[must_use]
    pub const fn fixture(&self) -> &'static str {
        match self {
            Self::Parse { fixture, .. } => fixture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn parse_error_exposes_fixture_and_source() {
        let source = serde_json::from_str::<u8>("nope").expect_err("invalid json");
        let err = ContentError::Parse {
            fixture: "projects.json",
            source,
        };
        assert_eq!(err.fixture(), "projects.json");
        assert_eq!(err.to_string(), "content fixture could not be parsed");
        assert!(err.source().is_some());
    }
}
