//! Error types for oxit8

use thiserror::Error;

use crate::cgats::CgatsError;
use crate::document::It8Kind;

/// Result type for oxit8 operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading an IT8 document
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LoadError {
    /// The text could not be tokenized
    #[error("Malformed sheet: {0}")]
    Malformed(#[from] CgatsError),

    /// Sheet type is not CTI1, CTI3 or CCMX
    #[error("Invalid sheet type: {0}")]
    UnknownVariant(String),

    /// `COLOR_REP` is missing or wrong for the sheet type
    #[error("Invalid data format: expected {expected}, got {}", .found.as_deref().unwrap_or("nothing"))]
    InvalidColorRepresentation {
        expected: &'static str,
        found: Option<String>,
    },

    /// `LUMINANCE_XYZ_CDM2` is missing or not three numbers
    #[error("LUMINANCE_XYZ_CDM2 format invalid: {}", .0.as_deref().unwrap_or("missing"))]
    InvalidLuminance(Option<String>),

    /// `NUMBER_OF_SETS` is not a non-negative integer
    #[error("NUMBER_OF_SETS invalid: {0}")]
    InvalidSetCount(String),

    /// Serialized document carries samples on a CCMX or a matrix on a target
    #[error("{0} document holds data of another kind")]
    KindMismatch(It8Kind),
}

/// Errors that can occur while saving an IT8 document
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SaveError {
    /// Normalization needs at least one white sample
    #[error("Failed to find any white samples")]
    NoWhiteSample,

    /// The brightest white sample has no luminance to scale against
    #[error("White sample luminance is {0}, cannot normalize to Y=100")]
    ZeroWhiteLuminance(f64),
}

/// Errors that can occur in oxit8 operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Loading failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Saving failed
    #[error(transparent)]
    Save(#[from] SaveError),

    /// Sample index past the end of the document
    #[error("Sample index {index} out of range (document has {count} samples)")]
    OutOfRange { index: usize, count: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
