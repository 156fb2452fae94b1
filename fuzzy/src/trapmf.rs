use prelude::*;

use crate::{numeric_params, MembershipFunction};

/// Trapezoidal membership function: 0 outside `[a, d]`, 1 on `[b, c]` and linear in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrapMf {
    a: float,
    b: float,
    c: float,
    d: float,
}

impl TrapMf {
    pub fn new(a: float, b: float, c: float, d: float) -> Result<TrapMf> {
        if !(a <= b && b <= c && c <= d) {
            return Err(Error::value_error(
                "The parameters must be specified such that a <= b <= c <= d.",
            ));
        }
        Ok(TrapMf::new_unchecked(a, b, c, d))
    }

    pub(crate) fn new_unchecked(a: float, b: float, c: float, d: float) -> TrapMf {
        TrapMf { a, b, c, d }
    }

    pub fn from_values(values: &[Value]) -> Result<TrapMf> {
        let p = numeric_params(values, 4, "trapezoidal")?;
        TrapMf::new(p[0], p[1], p[2], p[3])
    }

    // A zero width ramp is a crisp edge
    fn rising(&self, x: float) -> float {
        if self.b > self.a {
            (x - self.a) / (self.b - self.a)
        } else if x >= self.a {
            1.0
        } else {
            0.0
        }
    }

    fn falling(&self, x: float) -> float {
        if self.d > self.c {
            (self.d - x) / (self.d - self.c)
        } else if x <= self.d {
            1.0
        } else {
            0.0
        }
    }
}

impl MembershipFunction for TrapMf {
    fn params(&self) -> Vec<float> {
        vec![self.a, self.b, self.c, self.d]
    }

    fn degree(&self, x: float) -> float {
        if x.is_nan() {
            return x;
        }
        self.rising(x).min(self.falling(x)).min(1.0).max(0.0)
    }
}
