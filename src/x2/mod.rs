//! Pearson Χ<sup>2</sup> statistic and the uniformity test built on it
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::REPORT_DIGITS;
use crate::misc::round_to;
use crate::result::{Result, X2Error};

mod decision;

pub use decision::{
    decide, decide_expected, decide_with, Decision, TestResult, X2Test,
};

/// Expected frequencies under the null hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Expected<'a> {
    /// Every bin expects the mean observed count, `sum(obs) / len(obs)`
    #[default]
    Uniform,
    /// One expected count per bin
    Explicit(&'a [f64]),
}

/// Degrees of freedom, statistic, and per-bin contributions of a
/// Χ<sup>2</sup> accumulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Accumulated {
    /// Number of bins minus one
    pub df: usize,
    /// Sum of the unrounded contributions, rounded to two places
    pub statistic: f64,
    /// Each bin's contribution rounded to two places, in bin order
    pub contributions: Vec<f64>,
}

/// A single bin's contribution, `(o - e)² / e`.
///
/// # Example
///
/// ```rust
/// # use x2fit::x2::contribution;
/// assert_eq!(contribution(9.0, 6.0).unwrap(), 1.5);
/// assert!(contribution(9.0, 0.0).is_err());
/// ```
pub fn contribution(observed: f64, expected: f64) -> Result<f64> {
    if expected == 0.0 {
        Err(X2Error::ZeroExpected { ix: None })
    } else {
        Ok((observed - expected).powi(2) / expected)
    }
}

/// Accumulate the Χ<sup>2</sup> statistic over a sequence of observed
/// counts.
///
/// # Example
///
/// ```rust
/// use x2fit::x2::{accumulate, Expected};
///
/// let acc = accumulate(&[8, 7, 5, 4, 6], Expected::Uniform).unwrap();
///
/// assert_eq!(acc.df, 4);
/// assert_eq!(acc.statistic, 1.67);
/// assert_eq!(acc.contributions, vec![0.67, 0.17, 0.17, 0.67, 0.0]);
/// ```
pub fn accumulate(observed: &[usize], expected: Expected) -> Result<Accumulated> {
    let n = observed.len();
    if n < 2 {
        return Err(X2Error::TooFewIntervals { n });
    }

    let uniform: Vec<f64>;
    let expected: &[f64] = match expected {
        Expected::Explicit(es) if es.len() != n => {
            return Err(X2Error::LengthMismatch {
                n_observed: n,
                n_expected: es.len(),
            })
        }
        Expected::Explicit(es) => es,
        Expected::Uniform => {
            let mean = observed.iter().sum::<usize>() as f64 / n as f64;
            uniform = vec![mean; n];
            &uniform
        }
    };

    let raw = observed
        .iter()
        .zip(expected.iter())
        .enumerate()
        .map(|(ix, (&o, &e))| {
            contribution(o as f64, e)
                .map_err(|_| X2Error::ZeroExpected { ix: Some(ix) })
        })
        .collect::<Result<Vec<f64>>>()?;

    let statistic = round_to(raw.iter().sum::<f64>(), REPORT_DIGITS);
    let contributions = raw
        .into_iter()
        .map(|c| round_to(c, REPORT_DIGITS))
        .collect();

    Ok(Accumulated {
        df: n - 1,
        statistic,
        contributions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ErrorKind;
    use proptest::prelude::*;

    const TOL: f64 = 1E-12;

    #[test]
    fn contribution_value() {
        assert::close(contribution(8.0, 6.0).unwrap(), 4.0 / 6.0, TOL);
        assert_eq!(contribution(6.0, 6.0).unwrap(), 0.0);
    }

    #[test]
    fn contribution_zero_expected() {
        let err = contribution(1.0, 0.0).unwrap_err();
        assert_eq!(err, X2Error::ZeroExpected { ix: None });
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn accumulate_reference_counts() {
        let acc = accumulate(&[8, 7, 5, 4, 6], Expected::Uniform).unwrap();
        assert_eq!(acc.df, 4);
        assert_eq!(acc.statistic, 1.67);
        assert_eq!(acc.contributions, vec![0.67, 0.17, 0.17, 0.67, 0.0]);
    }

    #[test]
    fn accumulate_explicit_expected() {
        let acc =
            accumulate(&[10, 20, 30], Expected::Explicit(&[20.0, 20.0, 20.0]))
                .unwrap();
        assert_eq!(acc.df, 2);
        assert_eq!(acc.statistic, 10.0);
        assert_eq!(acc.contributions, vec![5.0, 0.0, 5.0]);
    }

    #[test]
    fn accumulate_statistic_sums_unrounded_values() {
        // contributions are 1/3 each: rounded they sum to 0.99
        let acc = accumulate(&[2, 4, 4], Expected::Explicit(&[3.0, 3.0, 3.0]))
            .unwrap();
        assert_eq!(acc.contributions, vec![0.33, 0.33, 0.33]);
        assert_eq!(acc.statistic, 1.0);
    }

    #[test]
    fn accumulate_too_few_intervals() {
        assert_eq!(
            accumulate(&[4], Expected::Uniform),
            Err(X2Error::TooFewIntervals { n: 1 })
        );
        assert_eq!(
            accumulate(&[], Expected::Uniform),
            Err(X2Error::TooFewIntervals { n: 0 })
        );
    }

    #[test]
    fn accumulate_length_mismatch() {
        let res = accumulate(&[1, 2, 3], Expected::Explicit(&[2.0, 2.0]));
        assert_eq!(
            res,
            Err(X2Error::LengthMismatch {
                n_observed: 3,
                n_expected: 2
            })
        );
    }

    #[test]
    fn accumulate_zero_expected_reports_first_bin() {
        let res =
            accumulate(&[1, 2, 3], Expected::Explicit(&[1.0, 0.0, 0.0]));
        assert_eq!(res, Err(X2Error::ZeroExpected { ix: Some(1) }));
    }

    #[test]
    fn accumulate_empty_sample_is_division_by_zero() {
        let res = accumulate(&[0, 0, 0], Expected::Uniform);
        assert_eq!(res, Err(X2Error::ZeroExpected { ix: Some(0) }));
    }

    #[test]
    fn expected_defaults_to_uniform() {
        assert_eq!(Expected::default(), Expected::Uniform);
    }

    proptest! {
        #[test]
        fn explicit_uniform_matches_default(
            obs in prop::collection::vec(0_usize..1000, 2..50)
        ) {
            prop_assume!(obs.iter().any(|&o| o > 0));
            let mean = obs.iter().sum::<usize>() as f64 / obs.len() as f64;
            let es = vec![mean; obs.len()];

            let by_default = accumulate(&obs, Expected::Uniform).unwrap();
            let by_explicit = accumulate(&obs, Expected::Explicit(&es)).unwrap();
            prop_assert_eq!(by_default, by_explicit);
        }

        #[test]
        fn df_is_len_minus_one(
            obs in prop::collection::vec(1_usize..1000, 2..50)
        ) {
            let acc = accumulate(&obs, Expected::Uniform).unwrap();
            prop_assert_eq!(acc.df, obs.len() - 1);
            prop_assert_eq!(acc.contributions.len(), obs.len());
            prop_assert!(acc.statistic >= 0.0);
        }
    }
}
