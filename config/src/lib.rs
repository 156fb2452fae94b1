extern crate filtering;
extern crate fuzzy;
#[macro_use]
extern crate log;
extern crate prelude;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate thiserror;
extern crate toml;

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use filtering::Rls;
use fuzzy::{MembershipFunction, TrapMf, TriMf};
use prelude::*;

pub type Result<T> = ::std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config: {0}")]
    Io(#[from] ::std::io::Error),
    #[error("unable to deserialise config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing [{0}] section")]
    Missing(&'static str),
    #[error("{0}")]
    Invalid(#[from] Error),
}

/// Parameters for the filters and membership functions of one application.
///
/// ```toml
/// [filter]
/// order = 4
/// forgetting_factor = 0.99
///
/// [[membership]]
/// name = "cold"
/// shape = "triangular"
/// params = [0, 5, 10]
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    pub filter: Option<FilterConfig>,
    #[serde(default)]
    pub membership: Vec<MembershipConfig>,
}

// Scalars are kept as raw values so that type errors are reported by the constructors
#[derive(Debug, Deserialize)]
pub struct FilterConfig {
    pub order: Value,
    pub forgetting_factor: Option<Value>,
    pub covariance_scale: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct MembershipConfig {
    pub name: Option<String>,
    pub shape: String,
    pub params: Vec<Value>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let mut config_str = String::new();
        File::open(path)?.read_to_string(&mut config_str)?;
        debug!("loaded config from {}", path.display());
        config_str.parse()
    }

    /// Builds the filter described by the `[filter]` section.
    pub fn rls(&self) -> Result<Rls> {
        match self.filter {
            Some(ref filter) => filter.build(),
            None => Err(ConfigError::Missing("filter")),
        }
    }

    pub fn membership_functions(&self) -> Result<Vec<Box<dyn MembershipFunction>>> {
        self.membership.iter().map(MembershipConfig::build).collect()
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Config> {
        Ok(toml::from_str(s)?)
    }
}

impl FilterConfig {
    pub fn build(&self) -> Result<Rls> {
        let rls = Rls::from_values(
            &self.order,
            self.forgetting_factor.as_ref(),
            self.covariance_scale.as_ref(),
        )?;
        Ok(rls)
    }
}

impl MembershipConfig {
    pub fn build(&self) -> Result<Box<dyn MembershipFunction>> {
        let mf: Box<dyn MembershipFunction> = match &self.shape[..] {
            "triangular" | "trimf" => Box::new(TriMf::from_values(&self.params)?),
            "trapezoidal" | "trapmf" => Box::new(TrapMf::from_values(&self.params)?),
            shape => {
                return Err(Error::value_error(format!(
                    "unknown membership function shape: {}",
                    shape
                )).into())
            }
        };
        debug!(
            "membership function {}: {} {:?}",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.shape,
            mf.params()
        );
        Ok(mf)
    }
}
