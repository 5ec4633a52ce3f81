//! Error types for the temperature-converter crate.

use thiserror::Error;

/// The main error type for this crate.
///
/// Conversion itself never fails; only parsing temperatures from text does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text could not be read as a number of degrees.
    #[error("Invalid temperature: {input:?}")]
    InvalidTemperature {
        /// The text that was rejected.
        input: String,
    },

    /// The text carried a unit other than Fahrenheit.
    #[error("Unexpected unit: {unit} (expected °F)")]
    UnexpectedUnit {
        /// The unit suffix that was found.
        unit: String,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
