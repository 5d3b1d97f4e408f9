//! Error types for the keyframe engine

use serde::{Deserialize, Serialize};

/// Comprehensive error type for keyframe operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum KeyframeError {
    /// Keyframe position is not a finite number
    #[error("Invalid keyframe position: {position}")]
    InvalidPosition { position: f64 },

    /// Keyframe sequence is not sorted by position
    #[error("Keyframe at index {index} is out of order: {position} < {previous}")]
    UnsortedKeyframe {
        index: usize,
        position: f64,
        previous: f64,
    },

    /// Color string could not be parsed
    #[error("Invalid color string {input:?}: {reason}")]
    InvalidColor { input: String, reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic keyframe error
    #[error("Keyframe error: {message}")]
    Generic { message: String },
}

impl KeyframeError {
    /// Create a new generic error
    pub fn new(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidPosition { .. } | Self::UnsortedKeyframe { .. } => "validation",
            Self::InvalidColor { .. } => "color",
            Self::SerializationError { .. } => "serialization",
            Self::Generic { .. } => "generic",
        }
    }
}

impl From<serde_json::Error> for KeyframeError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = KeyframeError::new("test error");
        assert!(matches!(error, KeyframeError::Generic { .. }));
    }

    #[test]
    fn test_error_categories() {
        let validation_error = KeyframeError::InvalidPosition { position: f64::NAN };
        assert_eq!(validation_error.category(), "validation");

        let color_error = KeyframeError::InvalidColor {
            input: "#zz0000".to_string(),
            reason: "bad digit".to_string(),
        };
        assert_eq!(color_error.category(), "color");
    }

    #[test]
    fn test_serialization() {
        let error = KeyframeError::new("test");
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: KeyframeError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}
