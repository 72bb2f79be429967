//! Color value types carried by IT8 samples
//!
//! This module provides:
//! - Device RGB readings (0.0-1.0 per channel)
//! - Absolute CIE XYZ readings (cd/m²)

pub mod rgb;
pub mod xyz;

pub use rgb::Rgb;
pub use xyz::Xyz;
