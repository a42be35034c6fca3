//! redeem-linalg: small linear-algebra helpers.
//!
//! This crate provides dense array conversion and transpose, orthogonal
//! projection onto a column space, reduced row echelon form over exact
//! rationals, and Markov-chain state propagation.
//!
//! Every helper is a pure function of its inputs. Intermediate results can be
//! observed through an injectable [`trace::TraceSink`]; by default nothing is
//! traced and nothing is printed.
pub mod config;
pub mod error;
pub mod markov;
pub mod math;
pub mod ops;
pub mod projection;
pub mod rational;
pub mod trace;

pub use error::LinalgError;
pub use math::{Array1, Array2, ShapeError};
pub use ops::{
    array_to_matrix, identity_matrix, project_b_colspace, project_vector, rref,
    transition_probability, transpose_matrix, MatrixTools,
};
