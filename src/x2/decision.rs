#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use super::{accumulate, Expected};
use crate::dist::ChiSquared;
use crate::frequency::FrequencyTable;
use crate::partition::Partition;
use crate::result::{Result, X2Error};
use crate::traits::{Cdf, InverseCdf};
use std::fmt;

/// Outcome of a Χ<sup>2</sup> uniformity test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum Decision {
    /// The statistic is below the critical value
    NullHypothesisNotRejected,
    /// The statistic is at or above the critical value
    NullHypothesisRejected,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullHypothesisNotRejected => write!(f, "H0 not rejected"),
            Self::NullHypothesisRejected => write!(f, "H0 rejected"),
        }
    }
}

/// Everything computed by one run of the test
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct TestResult {
    decision: Decision,
    contributions: Vec<(String, f64)>,
    df: usize,
    frequencies: FrequencyTable,
    statistic: f64,
    critical_value: f64,
    alpha: f64,
}

impl TestResult {
    #[inline]
    pub fn decision(&self) -> Decision {
        self.decision
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        self.decision == Decision::NullHypothesisRejected
    }

    /// `(label, contribution)` per interval, contributions rounded to two
    /// places
    #[inline]
    pub fn contributions(&self) -> &[(String, f64)] {
        &self.contributions
    }

    /// Degrees of freedom
    #[inline]
    pub fn df(&self) -> usize {
        self.df
    }

    /// Observed frequencies
    #[inline]
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The accumulated statistic, rounded to two places
    #[inline]
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// The `1 - α` quantile the statistic was compared against
    #[inline]
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of sample values that fell in no interval
    #[inline]
    pub fn excluded(&self) -> usize {
        self.frequencies.excluded()
    }

    /// Probability of a statistic at least this large under H0.
    ///
    /// Computed from the rounded statistic with the built-in Χ<sup>2</sup>
    /// distribution, whatever quantile function produced the decision.
    pub fn p_value(&self) -> f64 {
        ChiSquared::new_unchecked(self.df as f64).sf(&self.statistic)
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .contributions
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0)
            .max("interval".len());

        writeln!(f, "χ² test (α = {}): {}", self.alpha, self.decision)?;
        writeln!(f, "{:<width$}  {:>8}  {:>8}", "interval", "observed", "χ²")?;
        for ((label, x2), count) in self
            .contributions
            .iter()
            .zip(self.frequencies.counts().iter())
        {
            writeln!(f, "{label:<width$}  {count:>8}  {x2:>8.2}")?;
        }
        write!(
            f,
            "statistic = {:.2}, critical value = {:.4}, df = {}, p = {:.4}",
            self.statistic,
            self.critical_value,
            self.df,
            self.p_value()
        )?;
        if self.excluded() > 0 {
            write!(f, ", excluded = {}", self.excluded())?;
        }
        Ok(())
    }
}

fn validate_alpha(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(X2Error::AlphaOutOfRange { alpha })
    }
}

fn run<Q>(
    xs: &[f64],
    k: usize,
    alpha: f64,
    expected: Expected,
    quantile: Q,
) -> Result<TestResult>
where
    Q: FnOnce(f64, usize) -> Result<f64>,
{
    validate_alpha(alpha)?;

    let partition = Partition::uniform(k)?;
    let frequencies = FrequencyTable::count(xs, &partition);
    let acc = accumulate(frequencies.counts(), expected)?;
    let critical_value = quantile(1.0 - alpha, acc.df)?;

    let decision = if acc.statistic < critical_value {
        Decision::NullHypothesisNotRejected
    } else {
        Decision::NullHypothesisRejected
    };

    let contributions = frequencies
        .labels()
        .iter()
        .cloned()
        .zip(acc.contributions)
        .collect();

    Ok(TestResult {
        decision,
        contributions,
        df: acc.df,
        frequencies,
        statistic: acc.statistic,
        critical_value,
        alpha,
    })
}

fn x2_quantile(p: f64, df: usize) -> Result<f64> {
    let x2 = ChiSquared::new(df as f64)?;
    Ok(x2.invcdf(p))
}

/// Test whether `xs` is uniform on [0, 1) using `k` equal-width bins at
/// significance level `alpha`.
///
/// # Example
///
/// ```rust
/// use x2fit::x2::{decide, Decision};
///
/// // everything piled into the first bin
/// let xs = vec![0.05; 50];
/// let res = decide(&xs, 5, 0.05).unwrap();
///
/// assert_eq!(res.decision(), Decision::NullHypothesisRejected);
/// ```
pub fn decide(xs: &[f64], k: usize, alpha: f64) -> Result<TestResult> {
    run(xs, k, alpha, Expected::Uniform, x2_quantile)
}

/// Like [`decide`] with explicit expected frequencies, one per bin.
pub fn decide_expected(
    xs: &[f64],
    k: usize,
    alpha: f64,
    expected: Expected,
) -> Result<TestResult> {
    run(xs, k, alpha, expected, x2_quantile)
}

/// Like [`decide`] with a caller-supplied Χ<sup>2</sup> quantile function,
/// `quantile(p, df)`.
///
/// # Example
///
/// ```rust
/// use x2fit::x2::{decide_with, Decision};
///
/// // a table lookup of the 0.95 quantile
/// let table = |_p: f64, df: usize| [3.841, 5.991, 7.815, 9.488][df - 1];
///
/// let xs: Vec<f64> = (0..40).map(|i| f64::from(i) / 40.0).collect();
/// let res = decide_with(&xs, 4, 0.05, table).unwrap();
///
/// assert_eq!(res.critical_value(), 7.815);
/// assert_eq!(res.decision(), Decision::NullHypothesisNotRejected);
/// ```
pub fn decide_with<Q>(
    xs: &[f64],
    k: usize,
    alpha: f64,
    quantile: Q,
) -> Result<TestResult>
where
    Q: Fn(f64, usize) -> f64,
{
    run(xs, k, alpha, Expected::Uniform, |p, df| Ok(quantile(p, df)))
}

/// A reusable uniformity test configuration
///
/// # Example
///
/// ```rust
/// use x2fit::x2::X2Test;
///
/// let test = X2Test::new(4, 0.1).unwrap();
/// let xs = [0.1, 0.3, 0.6, 0.9, 0.2, 0.4, 0.7, 0.8];
///
/// let res = test.run(&xs).unwrap();
/// assert_eq!(res.frequencies().counts(), &[2, 2, 2, 2]);
/// assert!(!res.is_rejected());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct X2Test {
    n_intervals: usize,
    alpha: f64,
}

impl Default for X2Test {
    fn default() -> Self {
        X2Test {
            n_intervals: 10,
            alpha: 0.05,
        }
    }
}

impl X2Test {
    /// Create a test with `n_intervals` bins at significance `alpha`
    pub fn new(n_intervals: usize, alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;
        if n_intervals == 0 {
            Err(X2Error::IntervalCountZero)
        } else if n_intervals < 2 {
            Err(X2Error::TooFewIntervals { n: n_intervals })
        } else {
            Ok(X2Test { n_intervals, alpha })
        }
    }

    #[inline]
    pub fn n_intervals(&self) -> usize {
        self.n_intervals
    }

    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Run the test on `xs`
    pub fn run(&self, xs: &[f64]) -> Result<TestResult> {
        decide(xs, self.n_intervals, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ErrorKind;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256Plus;

    const REFERENCE_XS: [f64; 30] = [
        0.15, 0.22, 0.41, 0.65, 0.84, 0.81, 0.62, 0.45, 0.32, 0.07, 0.11,
        0.29, 0.58, 0.73, 0.93, 0.97, 0.79, 0.55, 0.35, 0.09, 0.99, 0.51,
        0.35, 0.02, 0.19, 0.24, 0.98, 0.10, 0.31, 0.17,
    ];

    #[test]
    fn reference_sample_is_not_rejected() {
        let res = decide(&REFERENCE_XS, 5, 0.5).unwrap();

        assert_eq!(res.decision(), Decision::NullHypothesisNotRejected);
        assert_eq!(res.df(), 4);
        assert_eq!(res.statistic(), 1.67);
        assert_eq!(res.frequencies().counts(), &[8, 7, 5, 4, 6]);
        assert::close(res.critical_value(), 3.356_693_980_033_321, 1E-8);
        assert_eq!(res.excluded(), 0);
        assert_eq!(res.alpha(), 0.5);
    }

    #[test]
    fn reference_sample_contributions_are_labeled() {
        let res = decide(&REFERENCE_XS, 5, 0.5).unwrap();
        let expected = vec![
            ("0.0 - 0.2".to_string(), 0.67),
            ("0.2 - 0.4".to_string(), 0.17),
            ("0.4 - 0.6".to_string(), 0.17),
            ("0.6 - 0.8".to_string(), 0.67),
            ("0.8 - 1.0".to_string(), 0.0),
        ];
        assert_eq!(res.contributions(), expected.as_slice());
    }

    #[test]
    fn decide_is_idempotent() {
        let a = decide(&REFERENCE_XS, 5, 0.5).unwrap();
        let b = decide(&REFERENCE_XS, 5, 0.5).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.critical_value().to_bits(), b.critical_value().to_bits());
    }

    #[test]
    fn statistic_equal_to_critical_value_rejects() {
        let res = decide_with(&REFERENCE_XS, 5, 0.5, |_, _| 1.67).unwrap();
        assert_eq!(res.decision(), Decision::NullHypothesisRejected);
        assert!(res.is_rejected());
    }

    #[test]
    fn quantile_is_called_with_one_minus_alpha() {
        let res = decide_with(&REFERENCE_XS, 5, 0.1, |p, df| {
            assert::close(p, 0.9, 1E-15);
            assert_eq!(df, 4);
            100.0
        })
        .unwrap();
        assert_eq!(res.critical_value(), 100.0);
    }

    #[test]
    fn alpha_must_be_in_open_unit_interval() {
        for alpha in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = decide(&REFERENCE_XS, 5, alpha).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(matches!(err, X2Error::AlphaOutOfRange { .. }));
        }
    }

    #[test]
    fn zero_intervals_is_invalid() {
        assert_eq!(
            decide(&REFERENCE_XS, 0, 0.05),
            Err(X2Error::IntervalCountZero)
        );
    }

    #[test]
    fn one_interval_is_invalid() {
        assert_eq!(
            decide(&REFERENCE_XS, 1, 0.05),
            Err(X2Error::TooFewIntervals { n: 1 })
        );
    }

    #[test]
    fn empty_sample_is_division_by_zero() {
        let err = decide(&[], 5, 0.05).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn out_of_domain_values_are_excluded_not_rejected() {
        let mut xs = REFERENCE_XS.to_vec();
        xs.extend([1.0, 1.5, -0.5]);
        let res = decide(&xs, 5, 0.5).unwrap();
        assert_eq!(res.excluded(), 3);
        assert_eq!(res.frequencies().total(), 30);
        assert_eq!(res.statistic(), 1.67);
    }

    #[test]
    fn decide_expected_uses_custom_frequencies() {
        // sample skewed toward low values, tested against a matching
        // decreasing expectation
        let xs: Vec<f64> = [0.1; 40]
            .iter()
            .chain([0.3; 30].iter())
            .chain([0.6; 20].iter())
            .chain([0.9; 10].iter())
            .copied()
            .collect();
        let es = [40.0, 30.0, 20.0, 10.0];

        let skewed = decide_expected(&xs, 4, 0.05, Expected::Explicit(&es))
            .unwrap();
        assert_eq!(skewed.statistic(), 0.0);
        assert!(!skewed.is_rejected());

        let uniform = decide(&xs, 4, 0.05).unwrap();
        assert!(uniform.is_rejected());
    }

    #[test]
    fn decide_expected_length_mismatch() {
        let res = decide_expected(
            &REFERENCE_XS,
            5,
            0.05,
            Expected::Explicit(&[6.0, 6.0]),
        );
        assert_eq!(
            res,
            Err(X2Error::LengthMismatch {
                n_observed: 5,
                n_expected: 2
            })
        );
    }

    #[test]
    fn p_value_agrees_with_decision() {
        let res = decide(&REFERENCE_XS, 5, 0.5).unwrap();
        // statistic < critical value <=> p > alpha
        assert!(res.p_value() > res.alpha());
        assert::close(res.p_value(), 0.796_159_673_429_538_3, 1E-8);
    }

    #[test]
    fn uniform_draws_usually_pass() {
        let mut rng = Xoshiro256Plus::seed_from_u64(1337);
        let test = X2Test::new(10, 0.01).unwrap();
        let passes = (0..20)
            .filter(|_| {
                let xs: Vec<f64> = (0..1000).map(|_| rng.gen()).collect();
                !test.run(&xs).unwrap().is_rejected()
            })
            .count();
        assert!(passes >= 17);
    }

    #[test]
    fn squared_draws_are_rejected() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let xs: Vec<f64> =
            (0..1000).map(|_| rng.gen::<f64>().powi(2)).collect();
        let res = X2Test::default().run(&xs).unwrap();
        assert!(res.is_rejected());
        assert!(res.p_value() < 1E-6);
    }

    #[test]
    fn x2_test_new_validates() {
        assert!(X2Test::new(5, 0.05).is_ok());
        assert_eq!(X2Test::new(0, 0.05), Err(X2Error::IntervalCountZero));
        assert_eq!(
            X2Test::new(1, 0.05),
            Err(X2Error::TooFewIntervals { n: 1 })
        );
        assert_eq!(
            X2Test::new(5, 0.0),
            Err(X2Error::AlphaOutOfRange { alpha: 0.0 })
        );
    }

    #[test]
    fn x2_test_default() {
        let test = X2Test::default();
        assert_eq!(test.n_intervals(), 10);
        assert_eq!(test.alpha(), 0.05);
    }

    #[test]
    fn decision_display() {
        assert_eq!(
            Decision::NullHypothesisNotRejected.to_string(),
            "H0 not rejected"
        );
        assert_eq!(Decision::NullHypothesisRejected.to_string(), "H0 rejected");
    }

    #[test]
    fn result_display_has_a_row_per_interval() {
        let res = decide(&REFERENCE_XS, 5, 0.5).unwrap();
        let text = res.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "χ² test (α = 0.5): H0 not rejected");
        assert!(lines[2].starts_with("0.0 - 0.2"));
        assert!(lines[2].ends_with("0.67"));
        assert!(lines[7].starts_with("statistic = 1.67, critical value = 3.3567"));
    }
}
