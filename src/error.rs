//! Error types for rs-kakuyomu.
//!
//! Every variant describes required markup that was missing or malformed.
//! Optional fields never produce an error; they resolve to `None` or an
//! empty `Vec` instead.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required text value did not match its expected pattern.
    #[error("invalid {field}: {value:?} does not match {expected}")]
    Format {
        /// Field being decoded (e.g. `"reviewPoints"`).
        field: &'static str,
        /// The raw, normalized text that failed to decode.
        value: String,
        /// Human-readable description of the expected shape.
        expected: &'static str,
    },

    /// A required node was not found under the work fragment.
    #[error("missing {field}: no node matches {selector:?}")]
    MissingNode {
        /// Field the node was looked up for.
        field: &'static str,
        /// Selector that matched nothing.
        selector: &'static str,
    },

    /// A required node was found but lacks a required attribute.
    #[error("missing {field}: node has no {attribute:?} attribute")]
    MissingAttribute {
        /// Field the attribute was read for.
        field: &'static str,
        /// Attribute name (e.g. `"href"`).
        attribute: &'static str,
    },

    /// A profile link could not be resolved as a URL.
    #[error("invalid user URL {value:?}: {source}")]
    InvalidUrl {
        /// The raw link target.
        value: String,
        /// Underlying URL parser error.
        source: url::ParseError,
    },
}

impl Error {
    /// Name of the field whose extraction failed.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Format { field, .. }
            | Self::MissingNode { field, .. }
            | Self::MissingAttribute { field, .. } => *field,
            Self::InvalidUrl { .. } => "userId",
        }
    }

    /// Whether this is a format error (required markup missing or malformed).
    #[must_use]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::Format { .. }
                | Self::MissingNode { .. }
                | Self::MissingAttribute { .. }
                | Self::InvalidUrl { .. }
        )
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
