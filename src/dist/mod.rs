//! Probability distributions
mod chi_squared;

pub use chi_squared::{ChiSquared, ChiSquaredError};
