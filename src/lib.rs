//! Pearson Χ<sup>2</sup> goodness-of-fit testing for samples on the unit
//! interval.
//!
//! The unit interval is cut into equal-width bins, the sample is tallied
//! into the bins, and the accumulated Χ<sup>2</sup> statistic is compared
//! against the `1 - α` quantile of the Χ<sup>2</sup> distribution with
//! `k - 1` degrees of freedom.
//!
//! # Example
//!
//! ```
//! use x2fit::prelude::*;
//!
//! let xs = vec![
//!     0.15, 0.22, 0.41, 0.65, 0.84, 0.81, 0.62, 0.45, 0.32, 0.07,
//!     0.11, 0.29, 0.58, 0.73, 0.93, 0.97, 0.79, 0.55, 0.35, 0.09,
//!     0.99, 0.51, 0.35, 0.02, 0.19, 0.24, 0.98, 0.10, 0.31, 0.17,
//! ];
//!
//! let res = decide(&xs, 5, 0.5).unwrap();
//!
//! assert_eq!(res.decision(), Decision::NullHypothesisNotRejected);
//! assert_eq!(res.df(), 4);
//! assert_eq!(res.statistic(), 1.67);
//! ```
//!
//! # Bin edges
//!
//! Bin edges are built cumulatively with rounding (see
//! [`partition::boundaries`]), so the last edge is not always exactly 1.
//! Values at or past the last edge, and values outside `[0, 1)`, are not
//! counted in any bin. The number of such values is reported through
//! [`frequency::FrequencyTable::excluded`] rather than raised as an error.
#[cfg(doctest)]
doc_comment::doctest!("../README.md", readme);

pub mod consts;
pub mod dist;
pub mod frequency;
pub mod misc;
pub mod partition;
pub mod prelude;
pub mod result;
pub mod traits;
pub mod x2;


#[macro_export]
macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}
