//! Random document generation
//!
//! Documents are generated from a seeded ChaCha RNG so failures reproduce.

use oxit8_core::{Document, DocumentOptions, It8Kind, Matrix3x3, Rgb, Sample, Xyz};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const INSTRUMENTS: [&str; 4] = [
    "X-Rite i1 Pro",
    "ColorMunki Display",
    "Hughski ColorHug",
    "Datacolor Spyder4",
];

/// White patches placed in a normalized document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitePatches {
    /// One exact white
    #[default]
    Single,
    /// Several exact whites with different luminance
    Several,
    /// One exact white plus off-white patches inside the white tolerance
    NearWhite,
}

/// Settings for [`random_document`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Document kind
    pub kind: It8Kind,
    /// Number of samples (ignored for CCMX)
    pub samples: usize,
    /// Generate a normalized target
    pub normalized: bool,
    /// White patches of a normalized target
    pub whites: WhitePatches,
    /// RNG seed
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: It8Kind::Ti3,
            samples: 64,
            normalized: false,
            whites: WhitePatches::Single,
            seed: 0x1778,
        }
    }
}

/// Generate a document with random readings and metadata
///
/// Non-white RGB values stay below 0.98 on the red channel so only the
/// designated white samples are picked up by normalization.
pub fn random_document(config: GeneratorConfig) -> Document {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let options = DocumentOptions {
        normalized: config.normalized,
        spectral: rng.gen_bool(0.5),
        instrument: rng
            .gen_bool(0.75)
            .then(|| INSTRUMENTS[rng.gen_range(0..INSTRUMENTS.len())].to_string()),
        reference: rng.gen_bool(0.5).then(|| format!("Reference #{}", rng.gen_range(1..100))),
        originator: Some("oxit8-tests".to_string()),
    };
    let mut doc = Document::with_options(config.kind, options);

    if config.kind == It8Kind::Ccmx {
        let mut matrix = Matrix3x3::zero();
        for row in 0..3 {
            for col in 0..3 {
                matrix[row][col] = rng.gen_range(-0.2..1.2);
            }
        }
        doc.set_matrix(matrix);
        return doc;
    }

    let white_count = match config.whites {
        WhitePatches::Single => 1,
        WhitePatches::Several | WhitePatches::NearWhite => rng.gen_range(2..=4),
    };
    let mut white_slots: Vec<usize> = (0..config.samples).collect();
    white_slots.shuffle(&mut rng);
    white_slots.truncate(if config.normalized { white_count } else { 0 });

    let peak = rng.gen_range(50.0..400.0);
    for i in 0..config.samples {
        if let Some(nth) = white_slots.iter().position(|&slot| slot == i) {
            // The first white is the brightest, the others are dimmer
            let y = if nth == 0 {
                peak
            } else {
                peak * rng.gen_range(0.6..0.99)
            };
            let rgb = if nth > 0 && config.whites == WhitePatches::NearWhite {
                Rgb::new(
                    rng.gen_range(0.992..=1.0),
                    rng.gen_range(0.992..=1.0),
                    rng.gen_range(0.992..=1.0),
                )
            } else {
                Rgb::WHITE
            };
            let xyz = Xyz::new(y * rng.gen_range(0.9..1.0), y, y * rng.gen_range(0.8..1.2));
            doc.push(Sample::new(rgb, xyz));
            continue;
        }
        let rgb = Rgb::new(
            rng.gen_range(0.0..0.98),
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..=1.0),
        );
        let xyz = Xyz::new(
            rng.gen_range(0.01..300.0),
            rng.gen_range(0.01..300.0),
            rng.gen_range(0.01..300.0),
        );
        doc.push(Sample::new(rgb, xyz));
    }
    doc
}
