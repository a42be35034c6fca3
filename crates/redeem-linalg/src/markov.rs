//! Markov chain state distributions.
//!
//! Neither the transition matrix nor the initial distribution is validated:
//! rows need not sum to one and entries may be negative.

use crate::error::LinalgError;
use crate::math::{Array1, Array2};

/// `transition` raised to `periods`. Zero periods gives the identity.
pub fn transition_power(
    transition: &Array2<f64>,
    periods: u32,
) -> Result<Array2<f64>, LinalgError> {
    transition.matrix_power(periods)
}

/// Distribution after applying an already exponentiated transition matrix.
pub fn propagate(initial: &Array1<f64>, power: &Array2<f64>) -> Result<Array1<f64>, LinalgError> {
    initial.dot_matrix(power)
}

/// State distribution after `periods` steps of the chain, starting from `initial`.
pub fn state_after(
    initial: &Array1<f64>,
    transition: &Array2<f64>,
    periods: u32,
) -> Result<Array1<f64>, LinalgError> {
    let power = transition_power(transition, periods)?;
    propagate(initial, &power)
}
