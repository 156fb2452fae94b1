#![allow(non_snake_case)]

extern crate config;
extern crate filtering;
extern crate prelude;

use std::fs::File;
use std::io::Write;

use config::{Config, ConfigError};
use filtering::AdaptiveFilter;
use prelude::nalgebra::Vector2;
use prelude::*;

static CONFIG_STR: &'static str = r#"
[filter]
order = 2
forgetting_factor = 0.99
covariance_scale = 1e3

[[membership]]
name = "cold"
shape = "triangular"
params = [0, 5, 10]

[[membership]]
name = "warm"
shape = "trapezoidal"
params = [5, 10, 20, 25.5]
"#;

fn invalid(err: ConfigError) -> Error {
    match err {
        ConfigError::Invalid(err) => err,
        err => panic!("unexpected error: {}", err),
    }
}

#[test]
fn builds_filter_and_membership_functions() {
    let config: Config = CONFIG_STR.parse().unwrap();

    let mut rls = config.rls().unwrap();
    let (order, lambda, scale, P, w) = rls.params();
    assert_eq!((order, lambda, scale), (2, 0.99, 1e3));
    assert_eq!(*P, Matrix::identity(2, 2) * 1e3);
    assert_eq!(*w, Vector::zeros(2));
    rls.fit(&Vector2::new(1.0, 2.0), 1.0).unwrap();

    let mfs = config.membership_functions().unwrap();
    assert_eq!(mfs.len(), 2);
    assert_eq!(mfs[0].params(), vec![0.0, 5.0, 10.0]);
    assert_eq!(mfs[0].degree(2.5), 0.5);
    assert_eq!(mfs[1].params(), vec![5.0, 10.0, 20.0, 25.5]);
    assert_eq!(mfs[1].degree(15.0), 1.0);
}

#[test]
fn filter_defaults() {
    let config: Config = "[filter]\norder = 4".parse().unwrap();
    let rls = config.rls().unwrap();
    assert_eq!(rls.forgetting_factor(), 1.0);
    assert_eq!(rls.covariance_scale(), 1e5);
    assert!(config.membership_functions().unwrap().is_empty());
}

#[test]
fn filter_type_and_value_errors() {
    let config: Config = "[filter]\norder = 5.0".parse().unwrap();
    let err = invalid(config.rls().unwrap_err());
    assert_eq!(err, Error::type_error("filter order must be an integer."));

    let config: Config = "[filter]\norder = 5\nforgetting_factor = \"high\""
        .parse()
        .unwrap();
    let err = invalid(config.rls().unwrap_err());
    assert_eq!(err, Error::type_error("forgetting factor must be a number."));

    let config: Config = "[filter]\norder = 5\ncovariance_scale = 0.9".parse().unwrap();
    let err = invalid(config.rls().unwrap_err());
    assert_eq!(err, Error::value_error("covariance factor must be ≥ 1."));
}

#[test]
fn membership_errors() {
    let config: Config = "[[membership]]\nshape = \"triangular\"\nparams = [2, 1, 0]"
        .parse()
        .unwrap();
    let err = invalid(config.membership_functions().unwrap_err());
    assert_eq!(err.kind(), ErrorKind::Value);

    let config: Config = "[[membership]]\nshape = \"gaussian\"\nparams = [0, 1]"
        .parse()
        .unwrap();
    let err = invalid(config.membership_functions().unwrap_err());
    assert_eq!(err.to_string(), "unknown membership function shape: gaussian");

    let config: Config = "[[membership]]\nshape = \"trapmf\"\nparams = [0, 1, \"2\", 3]"
        .parse()
        .unwrap();
    let err = invalid(config.membership_functions().unwrap_err());
    assert_eq!(err, Error::type_error("All parameters must be numeric."));
}

#[test]
fn missing_filter_section() {
    let config: Config = "".parse().unwrap();
    match config.rls() {
        Err(ConfigError::Missing("filter")) => {}
        other => panic!("unexpected: {:?}", other.map(|_| ())),
    }
}

#[test]
fn malformed_document() {
    match "[filter\norder = 1".parse::<Config>() {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("unexpected: {:?}", other.map(|_| ())),
    }
}

#[test]
fn load_from_file() {
    let path = std::env::temp_dir().join(format!("rls_config_{}.toml", std::process::id()));
    File::create(&path)
        .unwrap()
        .write_all(CONFIG_STR.as_bytes())
        .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.rls().unwrap().params().0, 2);
    std::fs::remove_file(&path).unwrap();

    match Config::load(&path) {
        Err(ConfigError::Io(_)) => {}
        other => panic!("unexpected: {:?}", other.map(|_| ())),
    }
}
