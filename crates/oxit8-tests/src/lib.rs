//! # oxit8-tests
//!
//! Fixture corpus and round-trip testing for oxit8.
//!
//! This crate provides:
//! - Argyll- and colord-style fixture files under `testdata/`
//! - Seeded random document generation
//! - Tolerance-aware document comparison
//!
//! ## Test Categories
//!
//! 1. **Round-trip**: save then load, raw and normalized
//! 2. **Load errors**: every failure the loader can report
//! 3. **Corpus**: files written by other calibration tools
//! 4. **Serde export**: JSON snapshots of documents

pub mod compare;
pub mod corpus;
pub mod generate;

pub use compare::{compare_documents, compare_samples};
pub use corpus::{Fixture, FixtureSummary, testdata_dir};
pub use generate::{GeneratorConfig, WhitePatches, random_document};
