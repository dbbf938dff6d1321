//! Error types for bikram-sambat.
//!
//! A single `thiserror`-derived enum covers every failure the engine can
//! report.  Malformed user input during parsing is *not* an error: the codec
//! reports it through a validity flag instead.

use thiserror::Error;

/// The top-level error type used throughout bikram-sambat.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year has no entry in the month-length table.
    #[error("year {year} outside supported range [{start}, {end}]")]
    OutOfRange {
        /// The year that was looked up.
        year: i32,
        /// First supported year.
        start: i32,
        /// Last supported year.
        end: i32,
    },

    /// General runtime error (see [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A Gregorian or Nepali date that does not exist.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The clock could not produce a local date.
    #[error("clock error: {0}")]
    Clock(String),
}

impl Error {
    /// Build an [`Error::OutOfRange`] for `year` against the window
    /// `[start, end]`.
    pub fn out_of_range(year: impl Into<i32>, start: impl Into<i32>, end: impl Into<i32>) -> Self {
        Error::OutOfRange {
            year: year.into(),
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Shorthand `Result` type used throughout bikram-sambat.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use bs_core::{ensure, errors::Error};
/// fn month_index(m: u8) -> bs_core::errors::Result<u8> {
///     ensure!(m < 12, "month index must be below 12, got {m}");
///     Ok(m)
/// }
/// assert!(month_index(3).is_ok());
/// assert!(month_index(12).is_err());
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

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use bs_core::{fail, errors::Error};
/// fn always_err() -> bs_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
