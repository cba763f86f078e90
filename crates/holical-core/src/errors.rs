//! Error types for holical.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Preconditions are
//! expressed with the [`ensure!`](crate::ensure) macro.

use thiserror::Error;

/// The top-level error type used throughout holical.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// The raw payload is not a valid sequence of holiday records.
    #[error("decode error: {0}")]
    Decode(String),

    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout holical.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use holical_core::{ensure, errors::Error};
/// fn month(n: u8) -> holical_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&n), "month {n} out of range [1, 12]");
///     Ok(n)
/// }
/// assert!(month(5).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
