//! Document comparison
//!
//! Floating values only survive a save/load cycle up to formatting
//! precision, so samples are compared with a relative tolerance.

use anyhow::{Result, ensure};
use oxit8_core::{Document, Sample};

/// Relative tolerance used by the round-trip tests
pub const ROUNDTRIP_TOLERANCE: f64 = 1e-5;

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    let diff = (a - b).abs();
    diff <= tolerance || diff <= tolerance * a.abs().max(b.abs())
}

/// Compare two samples within `tolerance`
pub fn compare_samples(expected: &Sample, actual: &Sample, tolerance: f64) -> Result<()> {
    for (e, a) in expected
        .rgb
        .to_array()
        .into_iter()
        .zip(actual.rgb.to_array())
    {
        ensure!(
            close(e, a, tolerance),
            "RGB mismatch: expected {:?}, got {:?}",
            expected.rgb,
            actual.rgb
        );
    }
    ensure!(
        expected.xyz.relative_eq(&actual.xyz, tolerance),
        "XYZ mismatch: expected {:?}, got {:?}",
        expected.xyz,
        actual.xyz
    );
    Ok(())
}

/// Compare kind, flags, metadata, matrix and every sample
pub fn compare_documents(expected: &Document, actual: &Document, tolerance: f64) -> Result<()> {
    ensure!(
        expected.kind() == actual.kind(),
        "kind: expected {}, got {}",
        expected.kind(),
        actual.kind()
    );
    ensure!(expected.normalized() == actual.normalized(), "normalized flag differs");
    ensure!(expected.spectral() == actual.spectral(), "spectral flag differs");
    ensure!(
        expected.instrument() == actual.instrument(),
        "instrument: expected {:?}, got {:?}",
        expected.instrument(),
        actual.instrument()
    );
    ensure!(
        expected.reference() == actual.reference(),
        "reference: expected {:?}, got {:?}",
        expected.reference(),
        actual.reference()
    );
    ensure!(
        expected.originator() == actual.originator(),
        "originator: expected {:?}, got {:?}",
        expected.originator(),
        actual.originator()
    );
    ensure!(
        expected.matrix().approx_eq(actual.matrix(), tolerance),
        "matrix: expected {:?}, got {:?}",
        expected.matrix(),
        actual.matrix()
    );
    ensure!(
        expected.sample_count() == actual.sample_count(),
        "sample count: expected {}, got {}",
        expected.sample_count(),
        actual.sample_count()
    );
    for (i, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
        compare_samples(e, a, tolerance).map_err(|err| err.context(format!("sample {}", i)))?;
    }
    Ok(())
}
