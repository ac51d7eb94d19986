//! Error types for the data-factory crate.
//!
//! Value lookups and bundle loading report [`ValuesError`]; selection and the
//! composite generators report [`GenerationError`], which wraps lookup
//! failures so callers handle a single type per generation call.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading resource bundles or resolving candidate lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValuesError {
    /// No bundle in the locale's fallback chain defines the category.
    #[error("category '{category}' not found for locale '{locale}'")]
    CategoryNotFound {
        /// Locale tag the lookup started from.
        locale: String,
        /// Category key that could not be resolved.
        category: String,
    },

    /// A locale tag could not be parsed.
    #[error("invalid locale tag: '{value}'")]
    InvalidLocale {
        /// The rejected tag.
        value: String,
    },

    /// A bundle file could not be read.
    #[error("failed to read bundle file at '{path}': {message}")]
    IoError {
        /// Path to the bundle file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The bundle JSON is malformed or missing required fields.
    #[error("invalid bundle JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The bundle format version is not supported.
    #[error("unsupported bundle version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Version found in the bundle.
        actual: u32,
    },

    /// The bundle defines no locales at all.
    #[error("bundle '{name}' defines no locales")]
    EmptyLocales {
        /// Bundle name.
        name: String,
    },

    /// Two locale keys normalise to the same tag, e.g. `zh_CN` and `zh-CN`.
    #[error("bundle defines locale '{tag}' more than once")]
    DuplicateLocale {
        /// Normalised tag.
        tag: String,
    },
}

/// Errors raised by selection and value generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The candidate collection was absent or empty.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Which precondition failed.
        message: &'static str,
    },

    /// A length, bound, or day range was negative or inverted.
    #[error("invalid range: {message}")]
    InvalidRange {
        /// Description of the rejected range.
        message: String,
    },

    /// The requested calendar date does not exist.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Calendar year.
        year: i32,
        /// One-based month.
        month: u32,
        /// Day of month.
        day: u32,
    },

    /// Candidate values could not be resolved.
    #[error(transparent)]
    Values(#[from] ValuesError),
}

impl GenerationError {
    /// Shorthand for an [`GenerationError::InvalidRange`] with a formatted
    /// message.
    pub(crate) fn invalid_range(message: impl Into<String>) -> Self {
        Self::InvalidRange {
            message: message.into(),
        }
    }
}
