use thiserror::Error;

/// Contract violations raised by pattern operations and the harness.
///
/// Expected negative outcomes (a dropped chain request, a denied proxy
/// read, an exhausted iterator) are ordinary return values and never show
/// up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid argument to {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    #[error("Unknown pattern '{name}' (run with --list to see the catalog)")]
    UnknownPattern { name: String },
}

impl CatalogError {
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    pub fn unknown_pattern(name: impl Into<String>) -> Self {
        Self::UnknownPattern { name: name.into() }
    }
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = CatalogError::invalid_argument("Hero::restore_state", "no snapshot");
        assert_eq!(
            err.to_string(),
            "Invalid argument to Hero::restore_state: no snapshot"
        );
    }

    #[test]
    fn test_unknown_pattern_message() {
        let err = CatalogError::unknown_pattern("monad");
        assert!(err.to_string().contains("'monad'"));
    }
}
