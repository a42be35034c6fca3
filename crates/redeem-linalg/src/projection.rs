//! Orthogonal projection onto a column space via the normal equations.
//!
//! For `A` with linearly independent columns the projector is
//!
//! P = A (AᵗA)⁻¹ Aᵗ
//!
//! and the projection of `b` is `P b`. The Gram matrix `AᵗA` is inverted
//! directly. There is no pseudo-inverse fallback: rank-deficient `A` is
//! reported as [`LinalgError::SingularMatrix`] when the elimination hits an
//! exact zero pivot, and silently produces garbage when it only comes close.
//! Callers are responsible for passing a full-column-rank `A`.

use std::borrow::Cow;

use crate::error::LinalgError;
use crate::math::{Array1, Array2};

/// The projector `A (AᵗA)⁻¹ Aᵗ` onto the column space of `colspace_a`.
pub fn projection_matrix(colspace_a: &Array2<f64>) -> Result<Array2<f64>, LinalgError> {
    let a_trans = colspace_a.t();
    let ata = a_trans.dot(colspace_a)?;
    log::trace!(
        "projection_matrix: A is {}x{}, inverting {}x{} Gram matrix",
        colspace_a.nrows(),
        colspace_a.ncols(),
        ata.nrows(),
        ata.ncols()
    );
    let ata_inv = ata.inv()?;
    colspace_a.dot(&ata_inv.dot(&a_trans)?)
}

/// Project `b` onto the column space of `colspace_a`.
///
/// With `need_transpose` set, `b` is transposed first, so a `1 x m` row can be
/// passed where an `m x 1` column is meant. The result has the shape of the
/// (possibly transposed) `b`; its row count must equal that of `colspace_a`.
pub fn project(
    b: &Array2<f64>,
    colspace_a: &Array2<f64>,
    need_transpose: bool,
) -> Result<Array2<f64>, LinalgError> {
    let b = if need_transpose {
        Cow::Owned(b.t())
    } else {
        Cow::Borrowed(b)
    };
    let p = projection_matrix(colspace_a)?;
    p.dot(&b)
}

/// Project a vector, read as a column, onto the column space of `colspace_a`.
pub fn project_column(
    b: &Array1<f64>,
    colspace_a: &Array2<f64>,
) -> Result<Array1<f64>, LinalgError> {
    let p = projection_matrix(colspace_a)?;
    p.dot_vector(b)
}
