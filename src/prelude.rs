//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::dist::*;
#[doc(no_inline)]
pub use crate::frequency::FrequencyTable;
#[doc(no_inline)]
pub use crate::partition::{Interval, Partition};
#[doc(no_inline)]
pub use crate::result::{ErrorKind, X2Error};
#[doc(no_inline)]
pub use crate::traits::*;
#[doc(no_inline)]
pub use crate::x2::{
    accumulate, contribution, decide, decide_expected, decide_with,
    Accumulated, Decision, Expected, TestResult, X2Test,
};
