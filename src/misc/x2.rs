use crate::dist::ChiSquared;
use crate::traits::Cdf;

/// Χ<sup>2</sup> (Chi-squared) test against arbitrary category
/// probabilities.
///
/// Returns the unrounded statistic and its p-value. Unlike
/// [`accumulate`](crate::x2::accumulate) this takes probabilities rather
/// than expected counts, and does not validate its input.
///
/// # Example
///
/// Test whether the observed counts were generated uniformly.
///
/// ```
/// use x2fit::misc::x2_test;
///
/// // The observed counts/frequencies
/// let f_obs: Vec<usize> = vec![28, 31, 40, 35];
///
/// // The probabilty with which each entry should occur
/// let ps: Vec<f64> = vec![0.25; 4];
///
/// let (stat, p) = x2_test(&f_obs, &ps);
/// assert!(p > 0.05);
/// ```
pub fn x2_test(f_obs: &[usize], ps: &[f64]) -> (f64, f64) {
    let k = f_obs.len();
    let nf = f_obs.iter().sum::<usize>() as f64;
    let x2 = nf
        * f_obs.iter().zip(ps.iter()).fold(0.0, |acc, (&o, &p)| {
            acc + (o as f64 / nf - p).powi(2) / p
        });

    let df = (k - 1) as f64;
    let p = ChiSquared::new_unchecked(df).sf(&x2);
    (x2, p)
}
