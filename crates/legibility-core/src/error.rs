//! Error types for legibility-core.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::metrics::Formula;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while scoring text.
#[derive(Error, Debug)]
pub enum ReadabilityError {
    /// The input text is empty or contains only whitespace.
    #[error("input text is empty")]
    InvalidInput,

    /// A formula needs words or sentences the text does not have.
    #[error("{formula}: insufficient data ({reason})")]
    InsufficientData {
        /// The formula that could not be computed.
        formula: Formula,
        /// Which count was missing.
        reason: &'static str,
    },

    /// A reference word list could not be read.
    #[error("failed to load word list {path}")]
    ResourceLoad {
        /// Path of the word list file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ReadabilityError {
    /// The formula an error originated from, when there is one.
    pub const fn formula(&self) -> Option<Formula> {
        match self {
            Self::InsufficientData { formula, .. } => Some(*formula),
            Self::InvalidInput | Self::ResourceLoad { .. } => None,
        }
    }
}

/// Result type alias using [`ReadabilityError`].
pub type ReadabilityResult<T> = Result<T, ReadabilityError>;
