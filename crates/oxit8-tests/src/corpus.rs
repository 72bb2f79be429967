//! Fixture corpus
//!
//! Files under `testdata/` imitate what Argyll CMS and colord write.

use std::path::{Path, PathBuf};

use oxit8_core::{Document, It8Kind};
use serde::{Deserialize, Serialize};

/// Directory holding the fixture files
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// A fixture file and what it should load as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// File name inside `testdata/`
    pub name: &'static str,
    /// Expected document kind
    pub kind: It8Kind,
    /// Expected sample count
    pub samples: usize,
    /// Expected normalization flag
    pub normalized: bool,
}

impl Fixture {
    /// Every loadable fixture
    pub const ALL: [Fixture; 4] = [
        Fixture {
            name: "display_normalized.ti3",
            kind: It8Kind::Ti3,
            samples: 5,
            normalized: true,
        },
        Fixture {
            name: "raw_target.ti3",
            kind: It8Kind::Ti3,
            samples: 4,
            normalized: false,
        },
        Fixture {
            name: "patches.ti1",
            kind: It8Kind::Ti1,
            samples: 4,
            normalized: false,
        },
        Fixture {
            name: "colormunki.ccmx",
            kind: It8Kind::Ccmx,
            samples: 0,
            normalized: false,
        },
    ];

    /// Full path of the fixture
    pub fn path(&self) -> PathBuf {
        testdata_dir().join(self.name)
    }

    /// Raw bytes of the fixture
    pub fn read(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.path())
    }

    /// Load the fixture as a document
    pub fn load(&self) -> anyhow::Result<Document> {
        let file = std::fs::File::open(self.path())?;
        Ok(Document::from_reader(file)?)
    }
}

/// Summary of a loaded document, for reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSummary {
    /// File name
    pub name: String,
    /// Document kind
    pub kind: It8Kind,
    /// Number of samples
    pub samples: usize,
    /// Whether the file was normalized to Y=100
    pub normalized: bool,
    /// Instrument, if recorded
    pub instrument: Option<String>,
}

impl FixtureSummary {
    /// Summarize a loaded document
    pub fn new(name: &str, doc: &Document) -> Self {
        Self {
            name: name.to_string(),
            kind: doc.kind(),
            samples: doc.sample_count(),
            normalized: doc.normalized(),
            instrument: doc.instrument().map(str::to_string),
        }
    }
}
