//! Errors reported by a layer.
//!
//! Every operation validates its arguments before touching any buffer, so a
//! returned error always means the layer is exactly as it was before the call.

use thiserror::Error;

/// Result type alias for layer operations.
pub type Result<T> = std::result::Result<T, LayerError>;

#[derive(Error, Debug)]
pub enum LayerError {
    /// The layer could not be constructed from the given id and length.
    #[error("invalid layer configuration: {0}")]
    Configuration(String),

    /// An input or label vector was empty or the wrong size for the layer.
    #[error("invalid input to layer {layer}: {reason}")]
    InvalidInput { layer: usize, reason: String },

    /// The label vector does not line up with the layer's outputs.
    #[error(
        "dimension mismatch in layer {layer}: expected {expected} labels, got {actual}"
    )]
    DimensionMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    /// A layer configuration could not be read.
    #[error("failed to parse layer configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read layer configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl LayerError {
    /// Returns true if the error is due to the data fed to the layer rather
    /// than how the layer was set up.
    ///
    /// Callers training over a data set may skip such examples and carry on.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LayerError::InvalidInput { .. } | LayerError::DimensionMismatch { .. } => true,
            LayerError::Configuration(_) | LayerError::Parse(_) | LayerError::Io(_) => false,
        }
    }

    pub(crate) fn invalid_input<S: Into<String>>(layer: usize, reason: S) -> Self {
        LayerError::InvalidInput {
            layer,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_layer() {
        let e = LayerError::DimensionMismatch {
            layer: 3,
            expected: 4,
            actual: 2,
        };
        assert_eq!(
            e.to_string(),
            "dimension mismatch in layer 3: expected 4 labels, got 2"
        );
        let e = LayerError::invalid_input(1, "empty input");
        assert_eq!(e.to_string(), "invalid input to layer 1: empty input");
    }

    #[test]
    fn recoverability() {
        assert!(LayerError::invalid_input(0, "x").is_recoverable());
        assert!(!LayerError::Configuration("x".into()).is_recoverable());
    }
}
