extern crate prelude;

use prelude::*;

mod trapmf;
pub use crate::trapmf::TrapMf;

mod trimf;
pub use crate::trimf::TriMf;

/// Maps an input value to a degree of membership in `[0, 1]`.
pub trait MembershipFunction: ::std::fmt::Debug {
    /// The ordered shape parameters.
    fn params(&self) -> Vec<float>;

    fn degree(&self, x: float) -> float;
}

/// Type checks every parameter of a membership function and the parameter count.
fn numeric_params(values: &[Value], count: usize, shape: &str) -> Result<Vec<float>> {
    let params = values
        .iter()
        .map(|v| number(v).ok_or_else(|| Error::type_error("All parameters must be numeric.")))
        .collect::<Result<Vec<_>>>()?;

    if params.len() != count {
        return Err(Error::value_error(format!(
            "a {} membership function takes {} parameters, got {}.",
            shape,
            count,
            params.len()
        )));
    }
    Ok(params)
}
