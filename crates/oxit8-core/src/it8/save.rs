//! IT8 Saver

use tracing::debug;

use super::keys::*;
use super::{
    COLOR_REP_RGB_XYZ, COLOR_REP_XYZ, MATRIX_FIELDS, NO, TARGET_FIELDS, YES, format_luminance,
};
use crate::cgats::{Sheet, Table};
use crate::color::Xyz;
use crate::document::{Document, It8Kind};
use crate::error::SaveError;

/// How readings are scaled when written normalized
#[derive(Debug, Clone, Copy, PartialEq)]
struct Normalization {
    /// Average absolute XYZ of the white samples
    luminance: Xyz,
    /// Factor bringing the brightest white to Y=100
    scale: f64,
}

impl Normalization {
    fn from_document(doc: &Document) -> Result<Self, SaveError> {
        let mut sum = Xyz::BLACK;
        let mut count = 0usize;
        let mut max_y = f64::NEG_INFINITY;

        for sample in doc.white_samples() {
            sum = sum + sample.xyz;
            count += 1;
            max_y = max_y.max(sample.xyz.y);
        }

        if count == 0 {
            return Err(SaveError::NoWhiteSample);
        }
        if max_y.is_nan() || max_y <= 0.0 {
            return Err(SaveError::ZeroWhiteLuminance(max_y));
        }

        Ok(Self {
            luminance: sum.scale(1.0 / count as f64),
            scale: 100.0 / max_y,
        })
    }
}

const fn descriptor(kind: It8Kind) -> &'static str {
    match kind {
        It8Kind::Ti1 => "Calibration Target chart information 1",
        It8Kind::Ti3 => "Calibration Target chart information 3",
        It8Kind::Ccmx => "Device Correction Matrix",
    }
}

/// Save a document to IT8 bytes
///
/// The output always ends with a NUL terminator.
pub fn save(doc: &Document) -> Result<Vec<u8>, SaveError> {
    let kind = doc.kind();
    let mut table = Table::default();
    table.set_sheet_type(kind.sheet_type());
    table.set_property(DESCRIPTOR, descriptor(kind));

    if let Some(originator) = doc.originator() {
        table.set_property(ORIGINATOR, originator);
    }
    if let Some(reference) = doc.reference() {
        table.set_property(REFERENCE, reference);
    }

    match kind {
        It8Kind::Ti1 | It8Kind::Ti3 => save_target(doc, &mut table)?,
        It8Kind::Ccmx => save_matrix(doc, &mut table),
    }

    let mut data = Sheet::from_table(table).to_bytes();
    if data.last() != Some(&0) {
        data.push(0);
    }

    debug!(
        kind = %kind,
        samples = doc.sample_count(),
        normalized = doc.normalized(),
        bytes = data.len(),
        "saved IT8 document"
    );
    Ok(data)
}

fn save_target(doc: &Document, table: &mut Table) -> Result<(), SaveError> {
    let normalization = if doc.normalized() {
        Some(Normalization::from_document(doc)?)
    } else {
        None
    };

    if doc.kind() == It8Kind::Ti3 {
        table.set_property(DEVICE_CLASS, "DISPLAY");
    }
    table.set_property(COLOR_REP, COLOR_REP_RGB_XYZ);
    if let Some(instrument) = doc.instrument() {
        table.set_property(TARGET_INSTRUMENT, instrument);
    }
    table.set_property(INSTRUMENT_TYPE_SPECTRAL, if doc.spectral() { YES } else { NO });
    match &normalization {
        Some(n) => {
            table.set_property(NORMALIZED_TO_Y_100, YES);
            table.set_property(LUMINANCE_XYZ_CDM2, format_luminance(&n.luminance));
        }
        None => table.set_property(NORMALIZED_TO_Y_100, NO),
    }

    table.set_property_number(NUMBER_OF_FIELDS, TARGET_FIELDS.len() as f64);
    table.set_property_number(NUMBER_OF_SETS, doc.sample_count() as f64);
    for (col, name) in TARGET_FIELDS.iter().enumerate() {
        table.set_data_format(col, *name);
    }

    for (row, sample) in doc.iter().enumerate() {
        let (rgb, xyz) = match &normalization {
            Some(n) => (sample.rgb.scale(100.0), sample.xyz.scale(n.scale)),
            None => (sample.rgb, sample.xyz),
        };
        table.set_numeric_cell(row, 0, (row + 1) as f64);
        for (i, v) in rgb.to_array().into_iter().enumerate() {
            table.set_numeric_cell(row, 1 + i, v);
        }
        for (i, v) in xyz.to_array().into_iter().enumerate() {
            table.set_numeric_cell(row, 4 + i, v);
        }
    }
    Ok(())
}

fn save_matrix(doc: &Document, table: &mut Table) {
    table.set_property(COLOR_REP, COLOR_REP_XYZ);
    if let Some(instrument) = doc.instrument() {
        table.set_property(INSTRUMENT, instrument);
    }

    table.set_property_number(NUMBER_OF_FIELDS, MATRIX_FIELDS.len() as f64);
    table.set_property_number(NUMBER_OF_SETS, 3.0);
    for (col, name) in MATRIX_FIELDS.iter().enumerate() {
        table.set_data_format(col, *name);
    }

    let matrix = doc.matrix();
    for row in 0..3 {
        for col in 0..3 {
            table.set_numeric_cell(row, col, matrix[row][col]);
        }
    }
}
