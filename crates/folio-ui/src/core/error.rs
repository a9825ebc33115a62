//! Error types for theme state and its browser seams.

use thiserror::Error;

/// Primary error type for theme operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A theme identifier was not `light` or `dark`.
    #[error("unknown theme")]
    UnknownTheme {
        /// Identifier supplied by the caller or read from storage.
        value: String,
    },
    /// A theme hook ran in a subtree with no theme provider above it.
    #[error("theme hooks must be used within a ThemeProvider")]
    OutsideProvider,
    /// Durable storage rejected a read or write.
    #[error("theme storage unavailable")]
    Storage {
        /// Storage key involved.
        key: String,
        /// Platform detail for diagnostics.
        detail: String,
    },
    /// The document root rejected a mutation.
    #[error("theme surface update failed")]
    Surface {
        /// Mutation that failed.
        operation: &'static str,
        /// Platform detail for diagnostics.
        detail: String,
    },
}

impl ThemeError {
    /// Storage failure for `key`.
    #[must_use]
    pub fn storage(key: &str, detail: impl Into<String>) -> Self {
        Self::Storage {
            key: key.to_string(),
            detail: detail.into(),
        }
    }

    /// Surface failure during `operation`.
    #[must_use]
    pub fn surface(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::Surface {
            operation,
            detail: detail.into(),
        }
    }
}

/// Convenience alias for theme results.
pub type ThemeResult<T> = Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::ThemeError;

    #[test]
    fn messages_are_static() {
        let err = ThemeError::storage("portfolio-theme", "SecurityError");
        assert_eq!(err.to_string(), "theme storage unavailable");
        assert!(matches!(
            err,
            ThemeError::Storage { ref key, ref detail }
                if key == "portfolio-theme" && detail == "SecurityError"
        ));
        assert_eq!(
            ThemeError::OutsideProvider.to_string(),
            "theme hooks must be used within a ThemeProvider"
        );
    }

    #[test]
    fn surface_errors_name_the_operation() {
        let err = ThemeError::surface("add_class", "detached");
        assert!(matches!(err, ThemeError::Surface { operation: "add_class", .. }));
    }
}
