//! Error types for the colorlit crate.

use thiserror::Error;

use crate::format::Format;

/// Errors that can occur when parsing literals or loading configuration.
///
/// Finding nothing under the cursor is not an error: [`locate`](crate::locate)
/// returns `None` for that.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A matched literal whose captures fail range or unit conversion.
    #[error("malformed {format} literal '{literal}': {reason}")]
    MalformedLiteral {
        format: Format,
        literal: String,
        reason: String,
    },

    /// A category name that does not belong to the closed set.
    #[error("unknown color category '{0}' (expected one of: any, css, qss, qml, glsl)")]
    UnknownCategory(String),

    /// A format name that does not belong to the closed set.
    #[error("unknown color format '{0}'")]
    UnknownFormat(String),

    /// Settings document could not be deserialized.
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] serde_yaml::Error),
}

impl ColorError {
    pub(crate) fn malformed(
        format: Format,
        literal: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ColorError::MalformedLiteral {
            format,
            literal: literal.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for colorlit operations.
pub type Result<T> = std::result::Result<T, ColorError>;
