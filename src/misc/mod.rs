//! Numerical helpers and stand-alone tests
mod func;
mod x2;

pub use func::round_to;
pub use x2::x2_test;
