use std::convert::TryFrom;

use prelude::nalgebra::storage::Storage;
use prelude::nalgebra::{Dim, Matrix1};
use prelude::*;

use crate::{dimension_error, values, AdaptiveFilter, Input};

pub const DEFAULT_FORGETTING_FACTOR: float = 1.0;
pub const DEFAULT_COVARIANCE_SCALE: float = 1e5;

/// Exponentially weighted recursive least squares filter.
///
/// Each observation is folded into the weights `w` and the covariance `P` in O(order^2) and then
/// discarded. A forgetting factor of 1 weights every observation equally.
#[derive(Clone, Debug)]
pub struct Rls {
    order: usize,
    lambda: float,
    scale: float,
    P: Matrix,
    w: Vector,
    prior_error: float,
    samples: u64,
}

impl Rls {
    pub fn new(order: usize, forgetting_factor: float, covariance_scale: float) -> Result<Rls> {
        if order < 1 {
            return Err(Error::value_error("filter order must be positive."));
        }
        if order.checked_mul(order).is_none() {
            return Err(Error::value_error("filter order is too large."));
        }
        // Written so that NaN is rejected too
        if !(forgetting_factor > 0.0 && forgetting_factor <= 1.0) {
            return Err(Error::value_error("forgetting factor must be in (0,1]."));
        }
        if !(covariance_scale >= 1.0) {
            return Err(Error::value_error("covariance factor must be ≥ 1."));
        }

        debug!(
            "rls filter: order {}, forgetting factor {}, covariance scale {}",
            order, forgetting_factor, covariance_scale
        );

        Ok(Rls {
            order,
            lambda: forgetting_factor,
            scale: covariance_scale,
            P: Matrix::from_diagonal_element(order, order, covariance_scale),
            w: Vector::zeros(order),
            prior_error: 0.0,
            samples: 0,
        })
    }

    pub fn with_order(order: usize) -> Result<Rls> {
        Rls::new(order, DEFAULT_FORGETTING_FACTOR, DEFAULT_COVARIANCE_SCALE)
    }

    /// Builds a filter from dynamically typed parameters. Missing optional parameters take their
    /// defaults. All type checks run before any value check.
    pub fn from_values(
        order: &Value,
        forgetting_factor: Option<&Value>,
        covariance_scale: Option<&Value>,
    ) -> Result<Rls> {
        let order = integer(order)
            .ok_or_else(|| Error::type_error("filter order must be an integer."))?;
        let forgetting_factor = match forgetting_factor {
            Some(v) => {
                number(v).ok_or_else(|| Error::type_error("forgetting factor must be a number."))?
            }
            None => DEFAULT_FORGETTING_FACTOR,
        };
        let covariance_scale = match covariance_scale {
            Some(v) => {
                number(v).ok_or_else(|| Error::type_error("covariance factor must be a number."))?
            }
            None => DEFAULT_COVARIANCE_SCALE,
        };

        if order < 1 {
            return Err(Error::value_error("filter order must be positive."));
        }
        let order = usize::try_from(order)
            .map_err(|_| Error::value_error("filter order is too large."))?;

        Rls::new(order, forgetting_factor, covariance_scale)
    }

    /// Dynamically typed counterpart of `fit`: `x` must be a column array such as
    /// `[[1], [2], [3]]` and `y` a number.
    pub fn fit_values(&mut self, x: &Value, y: &Value) -> Result<()> {
        let x = values::column(x, self.order)?;
        let y = number(y).ok_or_else(|| Error::type_error("output must be numeric."))?;
        self.update(&x, y)
    }

    /// Returns `(order, forgetting_factor, covariance_scale, covariance, weights)`.
    pub fn params(&self) -> (usize, float, float, &Matrix, &Vector) {
        (self.order, self.lambda, self.scale, &self.P, &self.w)
    }

    pub fn forgetting_factor(&self) -> float {
        self.lambda
    }

    pub fn covariance_scale(&self) -> float {
        self.scale
    }

    pub fn covariance(&self) -> &Matrix {
        &self.P
    }

    /// A priori error `y - x^T w` of the last accepted observation.
    pub fn prior_error(&self) -> float {
        self.prior_error
    }

    /// Number of observations accepted since construction or the last reset.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    fn column<R, C, S>(&self, x: &Input<R, C, S>) -> Result<Vector>
    where
        R: Dim,
        C: Dim,
        S: Storage<float, R, C>,
    {
        if x.shape() != (self.order, 1) {
            return Err(Error::value_error(dimension_error(self.order)));
        }
        Ok(Vector::from_iterator(self.order, x.iter().cloned()))
    }

    fn update(&mut self, x: &Vector, y: float) -> Result<()> {
        let P = &self.P;

        // A priori prediction error
        let alpha = y - x.dot(&self.w);

        let Px = P * x;
        let S = Matrix1::new(self.lambda + x.dot(&Px));
        if !(S[0].is_finite() && S[0] > 0.0) {
            warn!("rejecting rls update, gain normaliser is {}", S[0]);
            return Err(Error::value_error("gain normaliser must be finite and positive."));
        }
        let S_inv = S
            .try_inverse()
            .ok_or_else(|| Error::value_error("gain normaliser must be finite and positive."))?;

        // Gain vector
        let g = &Px * S_inv;

        let lambda_inv = 1.0 / self.lambda;
        let xtP = x.transpose() * P;
        let P_update = lambda_inv * P - lambda_inv * (&g * xtP);
        let w_update = &self.w + alpha * &g;
        // A tiny forgetting factor can still overflow lambda_inv
        if !(P_update.iter().all(|v| v.is_finite()) && w_update.iter().all(|v| v.is_finite())) {
            warn!("rejecting rls update, non-finite covariance or weights");
            return Err(Error::value_error("filter update must be finite."));
        }

        self.P = P_update;
        self.w = w_update;
        self.prior_error = alpha;
        self.samples += 1;

        trace!("rls update {}: prior error {}", self.samples, alpha);

        Ok(())
    }
}

impl AdaptiveFilter for Rls {
    fn order(&self) -> usize {
        self.order
    }

    fn fit<R, C, S>(&mut self, x: &Input<R, C, S>, y: float) -> Result<()>
    where
        R: Dim,
        C: Dim,
        S: Storage<float, R, C>,
    {
        let x = self.column(x)?;
        self.update(&x, y)
    }

    fn predict<R, C, S>(&self, x: &Input<R, C, S>) -> Result<float>
    where
        R: Dim,
        C: Dim,
        S: Storage<float, R, C>,
    {
        let x = self.column(x)?;
        Ok(x.dot(&self.w))
    }

    fn weights(&self) -> &Vector {
        &self.w
    }

    fn reset(&mut self) {
        debug!("rls filter reset after {} samples", self.samples);
        self.P = Matrix::from_diagonal_element(self.order, self.order, self.scale);
        self.w = Vector::zeros(self.order);
        self.prior_error = 0.0;
        self.samples = 0;
    }
}
