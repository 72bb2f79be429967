//! IT8 Loader

use tracing::{debug, warn};

use super::keys::*;
use super::{COLOR_REP_RGB_XYZ, COLOR_REP_XYZ, YES, parse_luminance};
use crate::cgats::{Sheet, Table};
use crate::color::{Rgb, Xyz};
use crate::document::{Document, It8Kind, Sample};
use crate::error::LoadError;
use crate::math::Matrix3x3;

/// Load a document from IT8 bytes
///
/// Only the first table of the sheet is read. Normalized readings are
/// converted back to absolute units.
pub fn load(data: &[u8]) -> Result<Document, LoadError> {
    let sheet = Sheet::parse(data).inspect_err(|e| warn!(error = %e, "cannot parse IT8 data"))?;
    let table = sheet.table();

    let tag = table.sheet_type();
    let kind =
        It8Kind::from_sheet_type(tag).ok_or_else(|| LoadError::UnknownVariant(tag.to_string()))?;

    let mut doc = Document::new(kind);
    match kind {
        It8Kind::Ti1 | It8Kind::Ti3 => load_target(&mut doc, table)?,
        It8Kind::Ccmx => load_matrix(&mut doc, table)?,
    }

    doc.set_originator(table.property(ORIGINATOR));
    doc.set_reference(table.property(REFERENCE));

    debug!(
        kind = %kind,
        samples = doc.sample_count(),
        normalized = doc.normalized(),
        "loaded IT8 document"
    );
    Ok(doc)
}

fn check_color_rep(table: &Table, expected: &'static str) -> Result<(), LoadError> {
    match table.property(COLOR_REP) {
        Some(found) if found == expected => Ok(()),
        found => Err(LoadError::InvalidColorRepresentation {
            expected,
            found: found.map(str::to_string),
        }),
    }
}

fn load_target(doc: &mut Document, table: &Table) -> Result<(), LoadError> {
    check_color_rep(table, COLOR_REP_RGB_XYZ)?;

    // White luminance in cd/m², only present for normalized data
    let luminance = if table.property(NORMALIZED_TO_Y_100) == Some(YES) {
        let text = table.property(LUMINANCE_XYZ_CDM2);
        let xyz = text
            .and_then(parse_luminance)
            .ok_or_else(|| LoadError::InvalidLuminance(text.map(str::to_string)))?;
        doc.set_normalized(true);
        Some(xyz)
    } else {
        None
    };

    doc.set_spectral(table.property(INSTRUMENT_TYPE_SPECTRAL) == Some(YES));
    doc.set_instrument(table.property(TARGET_INSTRUMENT));

    let count = match table.property(NUMBER_OF_SETS) {
        Some(text) => text
            .trim()
            .parse::<usize>()
            .map_err(|_| LoadError::InvalidSetCount(text.to_string()))?,
        None => table.row_count(),
    };

    let mut samples = Vec::with_capacity(count);
    for row in 0..count {
        let rgb = Rgb::new(
            table.numeric_cell(row, 1)?,
            table.numeric_cell(row, 2)?,
            table.numeric_cell(row, 3)?,
        );
        let xyz = Xyz::new(
            table.numeric_cell(row, 4)?,
            table.numeric_cell(row, 5)?,
            table.numeric_cell(row, 6)?,
        );
        samples.push(Sample::new(rgb, xyz));
    }

    if let Some(luminance) = luminance {
        for sample in &mut samples {
            sample.rgb = Rgb::from_array(sample.rgb.to_array().map(|v| v / 100.0));
        }
        let scale = denormalization_scale(&samples, luminance);
        for sample in &mut samples {
            sample.xyz = Xyz::from_array(sample.xyz.to_array().map(|v| v * scale));
        }
    }

    for sample in samples {
        doc.push(sample);
    }
    Ok(())
}

/// Factor taking normalized readings back to absolute units
///
/// `LUMINANCE_XYZ_CDM2` holds the mean of the white samples while the
/// brightest white sits at Y=100, so the whites on disk give the ratio.
fn denormalization_scale(samples: &[Sample], luminance: Xyz) -> f64 {
    let (sum, count) = samples
        .iter()
        .filter(|s| s.is_white())
        .fold((0.0, 0usize), |(sum, count), s| (sum + s.xyz.y, count + 1));
    let mean = if count > 0 { sum / count as f64 } else { 0.0 };
    if mean > 0.0 {
        luminance.y / mean
    } else {
        luminance.y / 100.0
    }
}

fn load_matrix(doc: &mut Document, table: &Table) -> Result<(), LoadError> {
    check_color_rep(table, COLOR_REP_XYZ)?;

    doc.set_instrument(table.property(INSTRUMENT));

    let mut matrix = Matrix3x3::zero();
    for row in 0..3 {
        for col in 0..3 {
            matrix[row][col] = table.numeric_cell(row, col)?;
        }
    }
    doc.set_matrix(matrix);
    Ok(())
}
