//! Linear algebra for correction matrices

pub mod matrix;

pub use matrix::Matrix3x3;
