use prelude::*;

use crate::{numeric_params, MembershipFunction, TrapMf};

/// Triangular membership function, a trapezoid whose plateau has shrunk to the single point `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriMf {
    trap: TrapMf,
}

impl TriMf {
    pub fn new(a: float, b: float, c: float) -> Result<TriMf> {
        if !(a <= b && b <= c) {
            return Err(Error::value_error(
                "The parameters must be specified such that a <= b <= c.",
            ));
        }
        Ok(TriMf {
            trap: TrapMf::new_unchecked(a, b, b, c),
        })
    }

    pub fn from_values(values: &[Value]) -> Result<TriMf> {
        let p = numeric_params(values, 3, "triangular")?;
        TriMf::new(p[0], p[1], p[2])
    }
}

impl MembershipFunction for TriMf {
    fn params(&self) -> Vec<float> {
        let mut params = self.trap.params();
        params.remove(2);
        params
    }

    fn degree(&self, x: float) -> float {
        self.trap.degree(x)
    }
}
