//! Small dense array types used throughout the crate.
//!
//! `Array2` and `Array1` wrap `ndarray` arrays kept in standard layout, adding
//! the checked kernels the helpers need: products, transpose, inverse and
//! integer powers. Both convert to and from their `ndarray` counterparts.
pub mod linalg;
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;
