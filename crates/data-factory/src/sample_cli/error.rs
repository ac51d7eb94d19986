//! Error types for the sample CLI.

use thiserror::Error;

use crate::error::{GenerationError, ValuesError};

/// Errors surfaced while producing sample output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// Layered configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Loader error message.
        message: String,
    },
    /// The factory could not be built from the settings.
    #[error("factory setup error: {source}")]
    Values {
        /// Underlying lookup or bundle error.
        #[from]
        #[source]
        source: ValuesError,
    },
    /// A generator call failed.
    #[error("generation error: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
    /// Writing a sample line failed.
    #[error("failed to write output: {message}")]
    Output {
        /// I/O error message.
        message: String,
    },
}
