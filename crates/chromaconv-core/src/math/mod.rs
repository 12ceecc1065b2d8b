//! Mathematical operations for color conversion
//!
//! This module provides the linear algebra the conversions are built on:
//! - 3x3 matrices for RGB↔XYZ transforms
//! - 3-component tristimulus vectors
//! - Power-law gamma helpers

pub mod gamma;
pub mod matrix;
pub mod vector;

pub use gamma::{LINEAR_GAMMA, signed_powf, signed_powf_vec, validate_gamma};
pub use matrix::Matrix3x3;
pub use vector::Vector3;
