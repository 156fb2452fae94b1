// Ignore this lint otherwise many warnings are generated for common mathematical notation
#![allow(non_snake_case)]

#[macro_use]
extern crate log;
extern crate prelude;

use prelude::nalgebra::storage::Storage;
use prelude::nalgebra::{self, Dim};
use prelude::*;

mod rls;
pub use crate::rls::{Rls, DEFAULT_COVARIANCE_SCALE, DEFAULT_FORGETTING_FACTOR};

mod values;

/// Any dense nalgebra matrix or vector of `float`s. Filters check its shape at runtime.
pub type Input<R, C, S> = nalgebra::Matrix<float, R, C, S>;

/// A linear predictor that adapts its weights one observation at a time.
pub trait AdaptiveFilter {
    fn order(&self) -> usize;

    /// Folds the observation `(x, y)` into the filter. `x` must be an `order`x1 column.
    ///
    /// A rejected observation leaves the filter untouched.
    fn fit<R, C, S>(&mut self, x: &Input<R, C, S>, y: float) -> Result<()>
    where
        R: Dim,
        C: Dim,
        S: Storage<float, R, C>;

    /// Returns the filter output `x^T w` using the current weights.
    fn predict<R, C, S>(&self, x: &Input<R, C, S>) -> Result<float>
    where
        R: Dim,
        C: Dim,
        S: Storage<float, R, C>;

    fn weights(&self) -> &Vector;

    /// Returns the filter to its freshly constructed state.
    fn reset(&mut self);
}

fn dimension_error(order: usize) -> String {
    format!(
        "input vector must be a column array with dimensions {}x1.",
        order
    )
}
