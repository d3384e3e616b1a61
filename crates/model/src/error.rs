//! Error types for the Folio model layer.

use crate::value::ValueKind;
use core::fmt;

/// Result type alias for Folio model operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for value extraction and validation.
#[derive(Debug)]
pub enum Error {
    /// A value held a different kind of payload than the extraction expected.
    TypeMismatch {
        expected: ValueKind,
        got: ValueKind,
    },
    /// Timestamp nanoseconds outside the valid `0..=999_999_999` range.
    InvalidTimestamp {
        seconds: i64,
        nanos: i32,
    },
    /// Coordinates outside the valid latitude/longitude ranges.
    InvalidGeoPoint {
        latitude: f64,
        longitude: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeMismatch { expected, got } => {
                write!(f, "Type mismatch: expected {:?}, got {:?}", expected, got)
            }
            Error::InvalidTimestamp { seconds, nanos } => {
                write!(f, "Invalid timestamp: {}s + {}ns", seconds, nanos)
            }
            Error::InvalidGeoPoint {
                latitude,
                longitude,
            } => {
                write!(f, "Invalid geo point: ({}, {})", latitude, longitude)
            }
        }
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: ValueKind, got: ValueKind) -> Self {
        Error::TypeMismatch { expected, got }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(seconds: i64, nanos: i32) -> Self {
        Error::InvalidTimestamp { seconds, nanos }
    }

    /// Creates an invalid geo point error.
    pub fn invalid_geo_point(latitude: f64, longitude: f64) -> Self {
        Error::InvalidGeoPoint {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::type_mismatch(ValueKind::Integer, ValueKind::String);
        assert!(err.to_string().contains("Type mismatch"));

        let err = Error::invalid_timestamp(0, -1);
        assert!(err.to_string().contains("-1ns"));

        let err = Error::invalid_geo_point(91.0, 0.0);
        assert!(err.to_string().contains("91"));
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::type_mismatch(ValueKind::Boolean, ValueKind::Null);
        match err {
            Error::TypeMismatch { expected, got } => {
                assert_eq!(expected, ValueKind::Boolean);
                assert_eq!(got, ValueKind::Null);
            }
            _ => panic!("Wrong error type"),
        }
    }
}
