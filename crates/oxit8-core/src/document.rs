//! IT8 Document Model
//!
//! A [`Document`] is the typed, in-memory form of a `.ti1`, `.ti3` or
//! `.ccmx` file. Sample readings are always held in absolute units; the
//! Y=100 normalization some files use on disk is applied by the loader and
//! saver, never stored.

use std::fmt;
use std::slice;

use tracing::warn;

use crate::color::{Rgb, Xyz};
use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use crate::error::LoadError;
use crate::math::Matrix3x3;

/// Per-channel tolerance for recognising a full-drive white sample
pub const WHITE_TOLERANCE: f64 = 0.01;

/// Which of the three IT8 file families a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum It8Kind {
    /// Calibration target, raw patch list (`CTI1`)
    Ti1,
    /// Calibration target with measured readings (`CTI3`)
    Ti3,
    /// Colorimeter correction matrix (`CCMX`)
    Ccmx,
}

impl It8Kind {
    /// The sheet type tag written for this kind
    pub const fn sheet_type(&self) -> &'static str {
        match self {
            Self::Ti1 => "CTI1",
            Self::Ti3 => "CTI3",
            Self::Ccmx => "CCMX",
        }
    }

    /// Detect the kind from a sheet type tag
    ///
    /// Only the prefix is compared, Argyll pads the tag with spaces.
    pub fn from_sheet_type(tag: &str) -> Option<Self> {
        if tag.starts_with("CTI1") {
            Some(Self::Ti1)
        } else if tag.starts_with("CTI3") {
            Some(Self::Ti3)
        } else if tag.starts_with("CCMX") {
            Some(Self::Ccmx)
        } else {
            None
        }
    }

    /// Check if this is a calibration target (TI1 or TI3)
    pub const fn is_calibration_target(&self) -> bool {
        matches!(self, Self::Ti1 | Self::Ti3)
    }
}

impl fmt::Display for It8Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_type())
    }
}

/// One RGB patch and its XYZ reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Device drive values, 0.0-1.0
    pub rgb: Rgb,
    /// Absolute reading
    pub xyz: Xyz,
}

impl Sample {
    /// Create a new sample
    #[inline]
    pub const fn new(rgb: Rgb, xyz: Xyz) -> Self {
        Self { rgb, xyz }
    }

    /// A black patch with a zero reading
    pub const BLACK: Self = Self::new(Rgb::BLACK, Xyz::BLACK);

    /// Check if the patch is full-drive white within [`WHITE_TOLERANCE`]
    #[inline]
    pub fn is_white(&self) -> bool {
        self.rgb.matches(&Rgb::WHITE, WHITE_TOLERANCE)
    }
}

/// Construction-time settings for a [`Document`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentOptions {
    /// Write samples normalized to Y=100
    pub normalized: bool,
    /// Readings came from a spectral instrument
    pub spectral: bool,
    /// Instrument name
    pub instrument: Option<String>,
    /// Reference the data was measured against
    pub reference: Option<String>,
    /// Program or person that produced the file
    pub originator: Option<String>,
}

/// An IT8 calibration target or correction matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DocumentData"))]
pub struct Document {
    kind: It8Kind,
    matrix: Matrix3x3,
    normalized: bool,
    spectral: bool,
    instrument: Option<String>,
    reference: Option<String>,
    originator: Option<String>,
    samples: Vec<Sample>,
}

/// Unchecked serialized form of a [`Document`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct DocumentData {
    kind: It8Kind,
    matrix: Matrix3x3,
    normalized: bool,
    spectral: bool,
    instrument: Option<String>,
    reference: Option<String>,
    originator: Option<String>,
    samples: Vec<Sample>,
}

#[cfg(feature = "serde")]
impl TryFrom<DocumentData> for Document {
    type Error = LoadError;

    fn try_from(data: DocumentData) -> std::result::Result<Self, LoadError> {
        let consistent = match data.kind {
            It8Kind::Ccmx => data.samples.is_empty(),
            It8Kind::Ti1 | It8Kind::Ti3 => data.matrix.is_zero(),
        };
        if !consistent {
            return Err(LoadError::KindMismatch(data.kind));
        }
        Ok(Self {
            kind: data.kind,
            matrix: data.matrix,
            normalized: data.normalized,
            spectral: data.spectral,
            instrument: data.instrument,
            reference: data.reference,
            originator: data.originator,
            samples: data.samples,
        })
    }
}

impl Document {
    /// Create an empty document
    pub fn new(kind: It8Kind) -> Self {
        Self::with_options(kind, DocumentOptions::default())
    }

    /// Create an empty document with the given settings
    pub fn with_options(kind: It8Kind, options: DocumentOptions) -> Self {
        Self {
            kind,
            matrix: Matrix3x3::zero(),
            normalized: options.normalized,
            spectral: options.spectral,
            instrument: options.instrument,
            reference: options.reference,
            originator: options.originator,
            samples: Vec::new(),
        }
    }

    /// Get the document kind
    pub fn kind(&self) -> It8Kind {
        self.kind
    }

    /// Get the correction matrix (zero unless this is a CCMX document)
    pub fn matrix(&self) -> &Matrix3x3 {
        &self.matrix
    }

    /// Set the correction matrix
    ///
    /// Ignored for calibration targets, which carry no matrix.
    pub fn set_matrix(&mut self, matrix: Matrix3x3) {
        if self.kind != It8Kind::Ccmx {
            warn!(kind = %self.kind, "ignoring correction matrix on a calibration target");
            return;
        }
        self.matrix = matrix;
    }

    /// Apply the correction matrix to a colorimeter reading
    pub fn apply_correction(&self, xyz: Xyz) -> Xyz {
        self.matrix.apply(xyz)
    }

    /// Gets if the data should be written normalized to Y=100
    pub fn normalized(&self) -> bool {
        self.normalized
    }

    /// Sets if the data should be written normalized to Y=100
    pub fn set_normalized(&mut self, normalized: bool) {
        self.normalized = normalized;
    }

    /// Gets if the readings came from a spectral instrument
    pub fn spectral(&self) -> bool {
        self.spectral
    }

    /// Sets if the readings came from a spectral instrument
    pub fn set_spectral(&mut self, spectral: bool) {
        self.spectral = spectral;
    }

    pub fn instrument(&self) -> Option<&str> {
        self.instrument.as_deref()
    }

    /// Set the instrument name
    ///
    /// Metadata is written as one quoted line: line breaks are saved as
    /// spaces, and `"` becomes `'` when the text also contains `'`.
    pub fn set_instrument(&mut self, instrument: Option<impl Into<String>>) {
        self.instrument = instrument.map(Into::into);
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Set the reference, saved with the same quoting as the instrument
    pub fn set_reference(&mut self, reference: Option<impl Into<String>>) {
        self.reference = reference.map(Into::into);
    }

    pub fn originator(&self) -> Option<&str> {
        self.originator.as_deref()
    }

    /// Set the originator, saved with the same quoting as the instrument
    pub fn set_originator(&mut self, originator: Option<impl Into<String>>) {
        self.originator = originator.map(Into::into);
    }

    /// Add a reading
    ///
    /// If either `rgb` or `xyz` is `None` a black sample is added for both,
    /// so every RGB value keeps exactly one XYZ partner. Ignored for CCMX
    /// documents.
    pub fn add_sample(&mut self, rgb: Option<Rgb>, xyz: Option<Xyz>) {
        let sample = match (rgb, xyz) {
            (Some(rgb), Some(xyz)) => Sample::new(rgb, xyz),
            _ => Sample::BLACK,
        };
        self.push(sample);
    }

    /// Append a sample. Ignored for CCMX documents.
    pub fn push(&mut self, sample: Sample) {
        if !self.kind.is_calibration_target() {
            warn!(kind = %self.kind, "ignoring sample on a correction matrix");
            return;
        }
        self.samples.push(sample);
    }

    /// Number of readings
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Get the reading at `index`, in absolute units
    pub fn sample_at(&self, index: usize) -> Result<&Sample> {
        self.samples.get(index).ok_or(Error::OutOfRange {
            index,
            count: self.samples.len(),
        })
    }

    /// All readings in file order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Samples usable as the luminance anchor for normalization
    pub fn white_samples(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter().filter(|s| s.is_white())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Sample;
    type IntoIter = slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
