//! Error types for the Catalog Browser

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON or does not match the schema
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An item is missing a required field
    #[error("Invalid item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    /// A compass entry has an empty color
    #[error("Invalid compass entry for category {0}")]
    InvalidCompassEntry(String),

    /// Category names must not be empty
    #[error("Category name must not be empty")]
    EmptyCategory,

    /// Zoom level outside the three supported tiers
    #[error("Zoom level {0} is not supported (expected 0, 1 or 2)")]
    InvalidZoomLevel(u8),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::InvalidZoomLevel(7);
        assert_eq!(
            format!("{}", err),
            "Zoom level 7 is not supported (expected 0, 1 or 2)"
        );

        let err = CatalogError::InvalidItem {
            index: 3,
            reason: "slug is empty".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid item at index 3: slug is empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
