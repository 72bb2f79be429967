//! # oxit8 - IT8 calibration files
//!
//! Read and write the CGATS/IT8.7 text files used by display and printer
//! calibration tools.
//!
//! ## Supported Files
//!
//! - **`.ti1`** (`CTI1`): calibration target patch lists
//! - **`.ti3`** (`CTI3`): patch lists with measured XYZ readings, raw or
//!   normalized to Y=100
//! - **`.ccmx`** (`CCMX`): colorimeter correction matrices
//!
//! ## Quick Start
//!
//! ```no_run
//! use oxit8_core::{Document, It8Kind, Rgb, Xyz};
//!
//! // Build a measurement set
//! let mut doc = Document::new(It8Kind::Ti3);
//! doc.set_instrument(Some("X-Rite i1 Pro"));
//! doc.add_sample(Some(Rgb::new(1.0, 1.0, 1.0)), Some(Xyz::new(95.0, 100.0, 108.9)));
//!
//! // Serialize and read back
//! let bytes = doc.save().unwrap();
//! let loaded = Document::load(&bytes).unwrap();
//! assert_eq!(loaded.sample_count(), 1);
//! ```
//!
//! Readings inside a [`Document`] are always absolute. Normalization is
//! applied only when the document is written.

pub mod cgats;
pub mod color;
pub mod document;
pub mod error;
pub mod it8;
pub mod math;

pub use color::{Rgb, Xyz};
pub use document::{Document, DocumentOptions, It8Kind, Sample, WHITE_TOLERANCE};
pub use error::{Error, LoadError, Result, SaveError};
pub use math::Matrix3x3;

/// Version of oxit8
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
