//! Error types.

use thiserror::Error;

/// Error returned by the control and by host implementations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocateError {
    /// One of the configured styles has out-of-range values.
    #[error("invalid {style} style: {reason}")]
    InvalidStyle {
        /// Which style is invalid.
        style: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Popup template cannot be formatted with `{distance}` and `{unit}`.
    #[error("invalid popup template '{template}': {reason}")]
    InvalidTemplate {
        /// Template as configured.
        template: String,
        /// Formatter message.
        reason: String,
    },

    /// Host failed to perform a requested action.
    #[error("host error: {0}")]
    Host(String),
}
