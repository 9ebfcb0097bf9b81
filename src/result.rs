//! Errors raised by the Χ<sup>2</sup> test pipeline
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::dist::ChiSquaredError;
use std::fmt;

pub type Result<T> = std::result::Result<T, X2Error>;

/// Coarse classification of an [`X2Error`]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    /// One or more of the supplied arguments is invalid
    InvalidArgument,
    /// A bin's expected frequency was zero
    DivisionByZero,
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::DivisionByZero => "division by zero",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum X2Error {
    /// The requested number of bins was zero
    IntervalCountZero,
    /// Fewer than two bins leaves no degrees of freedom
    TooFewIntervals { n: usize },
    /// The observed and expected frequency sequences differ in length
    LengthMismatch { n_observed: usize, n_expected: usize },
    /// The significance level is not in (0, 1)
    AlphaOutOfRange { alpha: f64 },
    /// An expected frequency is zero. `ix` is the offending bin when the
    /// value came from a sequence.
    ZeroExpected { ix: Option<usize> },
    /// The Χ<sup>2</sup> distribution could not be constructed
    Distribution(ChiSquaredError),
}

impl X2Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroExpected { .. } => ErrorKind::DivisionByZero,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl From<ChiSquaredError> for X2Error {
    fn from(err: ChiSquaredError) -> Self {
        Self::Distribution(err)
    }
}

impl std::error::Error for X2Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Distribution(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for X2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.kind().as_str())?;
        match self {
            Self::IntervalCountZero => {
                write!(f, "the number of intervals must be greater than zero")
            }
            Self::TooFewIntervals { n } => write!(
                f,
                "at least two intervals are required, but {n} were given"
            ),
            Self::LengthMismatch {
                n_observed,
                n_expected,
            } => write!(
                f,
                "{n_observed} observed frequencies but {n_expected} expected \
                 frequencies"
            ),
            Self::AlphaOutOfRange { alpha } => {
                write!(f, "alpha ({alpha}) must be in (0, 1)")
            }
            Self::ZeroExpected { ix: Some(ix) } => {
                write!(f, "expected frequency of interval {ix} is zero")
            }
            Self::ZeroExpected { ix: None } => {
                write!(f, "expected frequency is zero")
            }
            Self::Distribution(err) => write!(f, "{err}"),
        }
    }
}
