//! Dense kernels on the crate's array types: products, inverse, integer powers.
//!
//! Products go through `ndarray`'s `dot`. The inverse is a plain Gauss-Jordan
//! elimination so the crate does not need a LAPACK backend.

use ndarray::LinalgScalar;

use crate::error::LinalgError;
use crate::math::{Array1, Array2};

fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> LinalgError {
    LinalgError::DimensionMismatch { op, left, right }
}

fn not_square<T>(m: &Array2<T>) -> LinalgError {
    LinalgError::NotSquare {
        rows: m.nrows(),
        cols: m.ncols(),
    }
}

impl<A: LinalgScalar> Array2<A> {
    /// Matrix product `self · rhs`.
    pub fn dot(&self, rhs: &Array2<A>) -> Result<Array2<A>, LinalgError> {
        if self.ncols() != rhs.nrows() {
            return Err(mismatch("matmul", self.shape(), rhs.shape()));
        }
        Ok(Array2::from(self.view().dot(&rhs.view())))
    }

    /// Matrix times column vector.
    pub fn dot_vector(&self, rhs: &Array1<A>) -> Result<Array1<A>, LinalgError> {
        if self.ncols() != rhs.len() {
            return Err(mismatch("matmul", self.shape(), (rhs.len(), 1)));
        }
        Ok(Array1::from(self.view().dot(&rhs.view())))
    }

    /// Raise a square matrix to a non-negative integer power by repeated squaring.
    ///
    /// `n == 0` gives the identity.
    pub fn matrix_power(&self, n: u32) -> Result<Array2<A>, LinalgError> {
        if !self.is_square() {
            return Err(not_square(self));
        }

        let mut result = ndarray::Array2::<A>::eye(self.nrows());
        let mut base = self.view().to_owned();
        let mut exp = n;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.dot(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.dot(&base);
            }
        }
        log::trace!("matrix_power: {}x{} matrix to the power {}", self.nrows(), self.ncols(), n);
        Ok(Array2::from(result))
    }
}

impl<A: LinalgScalar> Array1<A> {
    /// Inner product of two vectors of the same length.
    pub fn dot(&self, rhs: &Array1<A>) -> Result<A, LinalgError> {
        if self.len() != rhs.len() {
            return Err(mismatch("dot", (1, self.len()), (rhs.len(), 1)));
        }
        Ok(self.view().dot(&rhs.view()))
    }

    /// Row vector times matrix.
    pub fn dot_matrix(&self, rhs: &Array2<A>) -> Result<Array1<A>, LinalgError> {
        if self.len() != rhs.nrows() {
            return Err(mismatch("matmul", (1, self.len()), rhs.shape()));
        }
        Ok(Array1::from(self.view().dot(&rhs.view())))
    }

    /// Element-wise `self - rhs`.
    pub fn checked_sub(&self, rhs: &Array1<A>) -> Result<Array1<A>, LinalgError> {
        if self.len() != rhs.len() {
            return Err(mismatch("sub", (1, self.len()), (1, rhs.len())));
        }
        Ok(Array1::from(&self.view() - &rhs.view()))
    }
}

fn swap_rows(m: &mut ndarray::Array2<f64>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for c in 0..m.ncols() {
        m.swap((a, c), (b, c));
    }
}

impl Array2<f64> {
    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Only an exactly zero pivot is reported as [`LinalgError::SingularMatrix`].
    /// Nearly singular input is inverted anyway and the result can be huge and
    /// meaningless.
    pub fn inv(&self) -> Result<Array2<f64>, LinalgError> {
        if !self.is_square() {
            return Err(not_square(self));
        }

        let n = self.nrows();
        let mut a = self.view().to_owned();
        let mut inv = ndarray::Array2::<f64>::eye(n);

        for col in 0..n {
            let pivot = (col..n).fold(col, |best, r| {
                if a[(r, col)].abs() > a[(best, col)].abs() {
                    r
                } else {
                    best
                }
            });
            if a[(pivot, col)] == 0.0 {
                log::debug!("inv: zero pivot in column {} of a {}x{} matrix", col, n, n);
                return Err(LinalgError::SingularMatrix);
            }
            swap_rows(&mut a, pivot, col);
            swap_rows(&mut inv, pivot, col);

            let p = a[(col, col)];
            a.row_mut(col).mapv_inplace(|v| v / p);
            inv.row_mut(col).mapv_inplace(|v| v / p);

            let a_row = a.row(col).to_owned();
            let inv_row = inv.row(col).to_owned();
            for r in 0..n {
                if r == col {
                    continue;
                }
                let factor = a[(r, col)];
                if factor == 0.0 {
                    continue;
                }
                a.row_mut(r).scaled_add(-factor, &a_row);
                inv.row_mut(r).scaled_add(-factor, &inv_row);
            }
        }

        Ok(Array2::from(inv))
    }
}
