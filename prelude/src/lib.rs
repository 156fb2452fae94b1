pub extern crate nalgebra;
extern crate rand;
extern crate rand_distr;
extern crate thiserror;
pub extern crate toml;

mod error;
pub use crate::error::{Error, ErrorKind, Result};

use rand::Rng;
use rand_distr::StandardNormal;
pub use toml::Value;

#[allow(non_camel_case_types)]
pub type float = f64;

pub type Matrix = nalgebra::DMatrix<float>;
pub type Vector = nalgebra::DVector<float>;

pub fn randn() -> float {
    rand::thread_rng().sample(StandardNormal)
}

/// Reads a numeric scalar out of a dynamic value. Integers and floats are numeric, everything
/// else (booleans and strings included) is not.
pub fn number(value: &Value) -> Option<float> {
    match *value {
        Value::Integer(i) => Some(i as float),
        Value::Float(f) => Some(f),
        _ => None,
    }
}

/// Reads an integer out of a dynamic value. Floats with an integral value are still floats.
pub fn integer(value: &Value) -> Option<i64> {
    value.as_integer()
}
