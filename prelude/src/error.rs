pub type Result<T> = ::std::result::Result<T, Error>;

/// Argument errors shared by the filters and membership functions.
///
/// The message is the whole `Display` output so callers can match on it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// An argument has the wrong representational type.
    #[error("{0}")]
    Type(String),
    /// An argument has the right type but lies outside its domain.
    #[error("{0}")]
    Value(String),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Type,
    Value,
}

impl Error {
    pub fn type_error<S: Into<String>>(msg: S) -> Error {
        Error::Type(msg.into())
    }

    pub fn value_error<S: Into<String>>(msg: S) -> Error {
        Error::Value(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::Type(_) => ErrorKind::Type,
            Error::Value(_) => ErrorKind::Value,
        }
    }

    pub fn message(&self) -> &str {
        match *self {
            Error::Type(ref msg) | Error::Value(ref msg) => msg,
        }
    }
}
