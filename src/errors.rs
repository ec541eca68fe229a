use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Precondition violations raised by [`Star`](crate::Star) construction and
/// projection. All variants are programmer errors at the call site; none are
/// recoverable by this crate.
#[derive(Debug, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CatalogError {
    #[error("Invalid entry id: {message}")]
    InvalidEntryId { message: String },

    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Invalid sidereal time: {message}")]
    InvalidSiderealTime { message: String },
}

impl CatalogError {
    pub fn invalid_entry_id(message: impl Into<String>) -> Self {
        Self::InvalidEntryId {
            message: message.into(),
        }
    }

    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn invalid_sidereal_time(message: impl Into<String>) -> Self {
        Self::InvalidSiderealTime {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_entry_id_message() {
        let err = CatalogError::invalid_entry_id("entry id 0 below minimum 1");
        assert!(err.to_string().contains("entry id 0"));
    }

    #[test]
    fn test_invalid_coordinate_message() {
        let err = CatalogError::invalid_coordinate("Dec out of range");
        assert!(err.to_string().contains("Dec out of range"));
    }

    #[test]
    fn test_invalid_sidereal_time_message() {
        let err = CatalogError::invalid_sidereal_time("not finite");
        assert!(err.to_string().starts_with("Invalid sidereal time"));
    }

    #[test]
    fn test_error_send_sync() {
        // Compile-time check that CatalogError implements Send + Sync
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<CatalogError>();
        _assert_sync::<CatalogError>();
    }
}
