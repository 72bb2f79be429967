//! IT8 Load and Save
//!
//! Semantic layer between [`crate::cgats`] sheets and [`Document`]s.
//!
//! # Normalization
//!
//! Argyll writes display readings normalized so the brightest white patch
//! has Y=100 and records the absolute white in `LUMINANCE_XYZ_CDM2`
//! (cd/m²). Readings are scaled back with the recorded white luminance on
//! load, and re-normalized against the current white samples on save.
//!
//! # Example
//!
//! ```
//! use oxit8_core::{Document, It8Kind, Rgb, Xyz, it8};
//!
//! let mut doc = Document::new(It8Kind::Ti3);
//! doc.set_normalized(true);
//! doc.add_sample(Some(Rgb::new(1.0, 1.0, 1.0)), Some(Xyz::new(95.0, 100.0, 108.9)));
//! doc.add_sample(Some(Rgb::new(0.0, 0.0, 0.0)), Some(Xyz::new(0.0, 0.0, 0.0)));
//!
//! let bytes = it8::save(&doc).unwrap();
//! let loaded = it8::load(&bytes).unwrap();
//! assert!(loaded.normalized());
//! assert!((loaded.sample_at(0).unwrap().xyz.x - 95.0).abs() < 1e-9);
//! ```

mod load;
mod save;

use std::io::{Read, Write};

pub use load::load;
pub use save::save;

use crate::color::Xyz;
use crate::document::Document;
use crate::error::Result;

pub(crate) mod keys {
    pub const COLOR_REP: &str = "COLOR_REP";
    pub const DESCRIPTOR: &str = "DESCRIPTOR";
    pub const DEVICE_CLASS: &str = "DEVICE_CLASS";
    pub const INSTRUMENT: &str = "INSTRUMENT";
    pub const INSTRUMENT_TYPE_SPECTRAL: &str = "INSTRUMENT_TYPE_SPECTRAL";
    pub const LUMINANCE_XYZ_CDM2: &str = "LUMINANCE_XYZ_CDM2";
    pub const NORMALIZED_TO_Y_100: &str = "NORMALIZED_TO_Y_100";
    pub const NUMBER_OF_FIELDS: &str = "NUMBER_OF_FIELDS";
    pub const NUMBER_OF_SETS: &str = "NUMBER_OF_SETS";
    pub const ORIGINATOR: &str = "ORIGINATOR";
    pub const REFERENCE: &str = "REFERENCE";
    pub const TARGET_INSTRUMENT: &str = "TARGET_INSTRUMENT";
}

/// `COLOR_REP` of calibration targets
pub const COLOR_REP_RGB_XYZ: &str = "RGB_XYZ";

/// `COLOR_REP` of correction matrices
pub const COLOR_REP_XYZ: &str = "XYZ";

const YES: &str = "YES";
const NO: &str = "NO";

/// Data format of calibration targets
pub const TARGET_FIELDS: [&str; 7] = [
    "SAMPLE_ID", "RGB_R", "RGB_G", "RGB_B", "XYZ_X", "XYZ_Y", "XYZ_Z",
];

/// Data format of correction matrices
pub const MATRIX_FIELDS: [&str; 3] = ["XYZ_X", "XYZ_Y", "XYZ_Z"];

/// Parse a `LUMINANCE_XYZ_CDM2` value: three space-separated numbers
pub fn parse_luminance(text: &str) -> Option<Xyz> {
    let mut values = [0.0; 3];
    let mut count = 0;
    for token in text.split(' ').filter(|t| !t.is_empty()) {
        if count == 3 {
            return None;
        }
        values[count] = token.parse::<f64>().ok()?;
        count += 1;
    }
    (count == 3).then(|| Xyz::from_array(values))
}

/// Format a `LUMINANCE_XYZ_CDM2` value
pub fn format_luminance(xyz: &Xyz) -> String {
    format!("{} {} {}", xyz.x, xyz.y, xyz.z)
}

impl Document {
    /// Load a document from IT8 bytes
    pub fn load(data: &[u8]) -> Result<Self> {
        Ok(load(data)?)
    }

    /// Save this document to IT8 bytes
    pub fn save(&self) -> Result<Vec<u8>> {
        Ok(save(self)?)
    }

    /// Read and load a document
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::load(&data)
    }

    /// Save this document into a writer
    ///
    /// Nothing is written if saving fails.
    pub fn to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let data = self.save()?;
        writer.write_all(&data)?;
        Ok(())
    }
}
