//! Public helper functions and the [`MatrixTools`] front-end.
//!
//! The free functions never trace. To observe intermediate results, build a
//! [`MatrixTools`] with a sink (or from a [`TraceConfig`]) and call the same
//! operations as methods.

use num_rational::BigRational;

use crate::config::TraceConfig;
use crate::error::LinalgError;
use crate::markov;
use crate::math::{Array1, Array2};
use crate::projection;
use crate::rational::{self, ToRational};
use crate::trace::{LogTrace, NoTrace, TraceSink};

/// Runs the helpers and reports their results to a [`TraceSink`].
#[derive(Debug, Clone, Default)]
pub struct MatrixTools<S = NoTrace> {
    sink: S,
}

impl MatrixTools<NoTrace> {
    pub fn new() -> Self {
        Self { sink: NoTrace }
    }
}

impl MatrixTools<LogTrace> {
    pub fn from_config(config: &TraceConfig) -> Self {
        Self {
            sink: LogTrace::from_config(config),
        }
    }
}

impl<S: TraceSink> MatrixTools<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// See [`project_b_colspace`]. Traces the result as `"projection"`.
    pub fn project_b_colspace(
        &self,
        b: &Array2<f64>,
        colspace_a: &Array2<f64>,
        need_transpose: bool,
    ) -> Result<Array2<f64>, LinalgError> {
        let projection = projection::project(b, colspace_a, need_transpose)?;
        self.sink.record("projection", &projection);
        Ok(projection)
    }

    /// See [`project_vector`]. Traces the result as `"projection"`.
    pub fn project_vector(
        &self,
        b: &Array1<f64>,
        colspace_a: &Array2<f64>,
    ) -> Result<Array1<f64>, LinalgError> {
        let projection = projection::project_column(b, colspace_a)?;
        self.sink.record("projection", &projection);
        Ok(projection)
    }

    /// See [`rref`]. Traces the reduced matrix as `"rref"`.
    pub fn rref<T: ToRational>(
        &self,
        matrix: &Array2<T>,
    ) -> Result<(Array2<BigRational>, Vec<usize>), LinalgError> {
        let exact = rational::to_rational_matrix(matrix)?;
        Ok(self.rref_exact(&exact))
    }

    /// Row-reduce a matrix that is already rational. Traces as `"rref"`.
    pub fn rref_exact(&self, matrix: &Array2<BigRational>) -> (Array2<BigRational>, Vec<usize>) {
        let (reduced, pivots) = rational::rref_exact(matrix);
        self.sink.record("rref", &RrefDisplay(&reduced, &pivots));
        (reduced, pivots)
    }

    /// See [`transition_probability`]. Traces the matrix power as `"transition_power"`.
    pub fn transition_probability(
        &self,
        initial_prob: &Array1<f64>,
        transition_matrix: &Array2<f64>,
        periods: u32,
    ) -> Result<Array1<f64>, LinalgError> {
        let power = markov::transition_power(transition_matrix, periods)?;
        self.sink.record("transition_power", &power);
        markov::propagate(initial_prob, &power)
    }
}

struct RrefDisplay<'a>(&'a Array2<BigRational>, &'a [usize]);

impl std::fmt::Display for RrefDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\npivots: {:?}", self.0, self.1)
    }
}

/// Dense matrix with the shape and values of the nested rows.
///
/// Fails with [`crate::math::ShapeError::Ragged`] when the rows differ in length.
pub fn array_to_matrix<T, I, R>(array: I) -> Result<Array2<T>, LinalgError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[T]>,
    T: Clone,
{
    Ok(Array2::from_rows(array)?)
}

pub fn transpose_matrix<T: Clone>(matrix: &Array2<T>) -> Array2<T> {
    matrix.t()
}

/// The `n x n` identity matrix.
pub fn identity_matrix(n: usize) -> Array2<f64> {
    Array2::eye(n)
}

/// Orthogonal projection of `b` onto the column space of `colspace_a`, using
/// the normal equations `P = A (AᵗA)⁻¹ Aᵗ`.
///
/// `need_transpose` transposes `b` before use. `colspace_a` must have full
/// column rank; an exactly singular `AᵗA` gives [`LinalgError::SingularMatrix`],
/// a nearly singular one is not detected.
pub fn project_b_colspace(
    b: &Array2<f64>,
    colspace_a: &Array2<f64>,
    need_transpose: bool,
) -> Result<Array2<f64>, LinalgError> {
    MatrixTools::new().project_b_colspace(b, colspace_a, need_transpose)
}

/// Like [`project_b_colspace`] with `b` taken as a column vector.
pub fn project_vector(
    b: &Array1<f64>,
    colspace_a: &Array2<f64>,
) -> Result<Array1<f64>, LinalgError> {
    MatrixTools::new().project_vector(b, colspace_a)
}

/// Reduced row echelon form over exact rationals, with the pivot columns.
pub fn rref<T: ToRational>(
    matrix: &Array2<T>,
) -> Result<(Array2<BigRational>, Vec<usize>), LinalgError> {
    MatrixTools::new().rref(matrix)
}

/// `initial_prob · transition_matrixᵖᵉʳⁱᵒᵈˢ`.
pub fn transition_probability(
    initial_prob: &Array1<f64>,
    transition_matrix: &Array2<f64>,
    periods: u32,
) -> Result<Array1<f64>, LinalgError> {
    MatrixTools::new().transition_probability(initial_prob, transition_matrix, periods)
}
