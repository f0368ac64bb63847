use std::{error, fmt};

/// Failure raised while validating an instance or its arguments.
///
/// Both variants are produced before any union-find state is mutated, so a
/// failed call leaves nothing behind to roll back. A disconnected graph is
/// not an error; it simply yields a spanning forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was unusable: a negative vertex count, a malformed edge
    /// token, an unknown dataset id, or an inconsistent flag combination.
    InvalidArgument { arg: &'static str, reason: String },
    /// An edge named a vertex outside `[0, len)`.
    IndexOutOfBounds { arg: &'static str, index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { arg, reason } => {
                write!(f, "invalid argument `{}`: {}", arg, reason)
            }
            Error::IndexOutOfBounds { arg, index, len } => {
                write!(
                    f,
                    "vertex {} in `{}` is out of range for {} vertices",
                    index, arg, len
                )
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
