//! Exact rational arithmetic: conversion into `BigRational` and reduced row
//! echelon form.
//!
//! Row reduction over floats has to decide when a tiny pivot is "really" zero.
//! Over the rationals every pivot decision is exact, so the pivot columns are
//! the true pivot columns of the input.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::LinalgError;
use crate::math::Array2;

/// Numbers with an exact rational value.
///
/// Floats convert to the exact value of their binary representation, so
/// `0.1_f64` becomes `3602879701896397/36028797018963968`, not `1/10`.
pub trait ToRational {
    /// `None` for values with no rational form (NaN, infinities).
    fn to_rational(&self) -> Option<BigRational>;
}

macro_rules! impl_to_rational_int {
    ($($t:ty),*) => {
        $(
            impl ToRational for $t {
                fn to_rational(&self) -> Option<BigRational> {
                    Some(BigRational::from_integer(BigInt::from(*self)))
                }
            }
        )*
    };
}

impl_to_rational_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ToRational for f64 {
    fn to_rational(&self) -> Option<BigRational> {
        BigRational::from_float(*self)
    }
}

impl ToRational for f32 {
    fn to_rational(&self) -> Option<BigRational> {
        BigRational::from_float(*self)
    }
}

impl ToRational for BigInt {
    fn to_rational(&self) -> Option<BigRational> {
        Some(BigRational::from_integer(self.clone()))
    }
}

impl ToRational for BigRational {
    fn to_rational(&self) -> Option<BigRational> {
        Some(self.clone())
    }
}

/// Convert every element of `matrix` to an exact rational.
pub fn to_rational_matrix<T: ToRational>(
    matrix: &Array2<T>,
) -> Result<Array2<BigRational>, LinalgError> {
    let mut data = Vec::with_capacity(matrix.nrows() * matrix.ncols());
    for ((row, col), value) in matrix.view().indexed_iter() {
        let exact = value
            .to_rational()
            .ok_or(LinalgError::NonFinite { row, col })?;
        data.push(exact);
    }
    Ok(Array2::from_shape_vec(matrix.shape(), data)?)
}

/// Reduced row echelon form and the pivot columns, in ascending order.
///
/// Gauss-Jordan elimination: the first nonzero entry at or below the current
/// pivot row is swapped up, scaled to one, and cleared from every other row.
pub fn rref_exact(matrix: &Array2<BigRational>) -> (Array2<BigRational>, Vec<usize>) {
    let (rows, cols) = matrix.shape();
    let mut m = matrix.clone();
    let mut pivots = Vec::new();
    let mut pivot_row = 0;

    for col in 0..cols {
        if pivot_row == rows {
            break;
        }
        let found = (pivot_row..rows).find(|&r| !m[(r, col)].is_zero());
        let r = match found {
            Some(r) => r,
            None => continue,
        };
        m.swap_rows(r, pivot_row);

        let pivot = m[(pivot_row, col)].clone();
        if !pivot.is_one() {
            for c in col..cols {
                let scaled = m[(pivot_row, c)].clone() / pivot.clone();
                m[(pivot_row, c)] = scaled;
            }
        }

        for other in 0..rows {
            if other == pivot_row {
                continue;
            }
            let factor = m[(other, col)].clone();
            if factor.is_zero() {
                continue;
            }
            for c in col..cols {
                let reduced = m[(other, c)].clone() - factor.clone() * m[(pivot_row, c)].clone();
                m[(other, c)] = reduced;
            }
        }

        pivots.push(col);
        pivot_row += 1;
    }

    log::trace!("rref: {}x{} matrix has {} pivots", rows, cols, pivots.len());
    (m, pivots)
}

/// Convert to rationals, then row-reduce.
pub fn rref<T: ToRational>(
    matrix: &Array2<T>,
) -> Result<(Array2<BigRational>, Vec<usize>), LinalgError> {
    let exact = to_rational_matrix(matrix)?;
    Ok(rref_exact(&exact))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn floats_convert_exactly() {
        assert_eq!(0.5f64.to_rational(), Some(ratio(1, 2)));
        assert_eq!((-3.0f64).to_rational(), Some(ratio(-3, 1)));
        assert_ne!(0.1f64.to_rational(), Some(ratio(1, 10)));
        assert_eq!(f64::NAN.to_rational(), None);
        assert_eq!(f64::INFINITY.to_rational(), None);
    }

    #[test]
    fn non_finite_entries_are_located() {
        let m = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, f64::NAN]).unwrap();
        assert_eq!(
            to_rational_matrix(&m).unwrap_err(),
            LinalgError::NonFinite { row: 1, col: 1 }
        );
    }

    #[test]
    fn rref_keeps_fractions_exact() {
        let m = Array2::from_shape_vec((2, 2), vec![3, 1, 1, 2]).unwrap();
        let (r, pivots) = rref(&m).unwrap();
        assert_eq!(pivots, vec![0, 1]);
        assert_eq!(r, Array2::eye(2));

        let m = Array2::from_shape_vec((2, 3), vec![3, 1, 1, 1, 2, 0]).unwrap();
        let (r, pivots) = rref(&m).unwrap();
        assert_eq!(pivots, vec![0, 1]);
        assert_eq!(r.row(0).to_vec(), vec![ratio(1, 1), ratio(0, 1), ratio(2, 5)]);
        assert_eq!(r.row(1).to_vec(), vec![ratio(0, 1), ratio(1, 1), ratio(-1, 5)]);
    }

    #[test]
    fn rref_skips_zero_columns() {
        let m = Array2::from_shape_vec((2, 3), vec![0, 1, 2, 0, 2, 4]).unwrap();
        let (r, pivots) = rref(&m).unwrap();
        assert_eq!(pivots, vec![1]);
        assert_eq!(r.row(0).to_vec(), vec![ratio(0, 1), ratio(1, 1), ratio(2, 1)]);
        assert!(r.row(1).iter().all(|v| v.is_zero()));
    }

    #[test]
    fn rref_of_empty_matrix() {
        let m: Array2<i32> = Array2::from_shape_vec((0, 3), vec![]).unwrap();
        let (r, pivots) = rref(&m).unwrap();
        assert_eq!(r.shape(), (0, 3));
        assert!(pivots.is_empty());
    }
}
