//! Equal-width partitions of the unit interval
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::consts::{EDGE_DIGITS, WIDTH_DIGITS};
use crate::misc::round_to;
use crate::result::{Result, X2Error};
use std::fmt;
use std::iter;

/// Compute the `k + 1` edges of `k` equal-width bins over [0, 1].
///
/// The width is `round(1/k, 4)` and each edge is the previous edge plus
/// the width, rounded to three places. Because of that rounding the last
/// edge can fall short of (or pass) 1.
///
/// # Example
///
/// ```rust
/// # use x2fit::partition::boundaries;
/// let edges = boundaries(5).unwrap();
/// assert_eq!(edges, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
///
/// // 1/3 rounds to 0.3333, and the edges drift
/// let edges = boundaries(3).unwrap();
/// assert_eq!(edges, vec![0.0, 0.333, 0.666, 0.999]);
///
/// assert!(boundaries(0).is_err());
/// ```
pub fn boundaries(k: usize) -> Result<Vec<f64>> {
    if k == 0 {
        return Err(X2Error::IntervalCountZero);
    }

    let width = round_to(1.0 / k as f64, WIDTH_DIGITS);
    let edges = iter::once(0.0)
        .chain((0..k).scan(0.0, |edge, _| {
            *edge = round_to(*edge + width, EDGE_DIGITS);
            Some(*edge)
        }))
        .collect();
    Ok(edges)
}

/// A half-open interval, `[lower, upper)`, with a display label
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Interval {
    lower: f64,
    upper: f64,
    label: String,
}

impl Interval {
    /// Create a new interval labeled `"<lower> - <upper>"`.
    ///
    /// Each bound is printed in its shortest round-trip form with at least
    /// one decimal place.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use x2fit::partition::Interval;
    /// let ival = Interval::new(0.0, 0.2);
    /// assert_eq!(ival.label(), "0.0 - 0.2");
    /// assert!(ival.contains(0.0));
    /// assert!(!ival.contains(0.2));
    /// ```
    pub fn new(lower: f64, upper: f64) -> Self {
        Interval {
            lower,
            upper,
            label: format!("{lower:?} - {upper:?}"),
        }
    }

    /// Inclusive lower bound
    #[inline]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Exclusive upper bound
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[inline]
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Returns `true` if `lower <= x < upper`
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x < self.upper
    }

    /// Width of the interval. Zero-width intervals are possible when the
    /// bin width rounds below the edge precision.
    #[inline]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{})", self.label)
    }
}

/// An ordered sequence of adjacent intervals
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Partition {
    intervals: Vec<Interval>,
}

impl Partition {
    /// Build the partition `[b[i], b[i+1])` for `i` in `0..b.len() - 1`.
    ///
    /// Fewer than two edges yields an empty partition.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use x2fit::partition::Partition;
    /// let part = Partition::from_boundaries(&[0.0, 0.333, 0.666, 0.999]);
    /// let labels: Vec<&str> = part.labels().collect();
    ///
    /// assert_eq!(labels, vec!["0.0 - 0.333", "0.333 - 0.666", "0.666 - 0.999"]);
    /// ```
    pub fn from_boundaries(edges: &[f64]) -> Self {
        let intervals = edges
            .windows(2)
            .map(|bounds| Interval::new(bounds[0], bounds[1]))
            .collect();
        Partition { intervals }
    }

    /// `k` equal-width bins over the unit interval
    ///
    /// # Example
    ///
    /// ```rust
    /// # use x2fit::partition::Partition;
    /// let part = Partition::uniform(4).unwrap();
    /// assert_eq!(part.k(), 4);
    /// assert_eq!(part.intervals()[3].label(), "0.75 - 1.0");
    /// ```
    pub fn uniform(k: usize) -> Result<Self> {
        boundaries(k).map(|edges| Self::from_boundaries(&edges))
    }

    /// The number of intervals
    #[inline]
    pub fn k(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.intervals.iter().map(Interval::label)
    }

    /// Index of the interval containing `x`, if any.
    ///
    /// Edges are non-decreasing, so the only candidate is the last
    /// interval whose lower bound is at most `x`. NaN is in no interval.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use x2fit::partition::Partition;
    /// let part = Partition::uniform(5).unwrap();
    ///
    /// assert_eq!(part.locate(0.0), Some(0));
    /// assert_eq!(part.locate(0.4), Some(2));
    /// assert_eq!(part.locate(1.0), None);
    /// assert_eq!(part.locate(-0.1), None);
    /// ```
    pub fn locate(&self, x: f64) -> Option<usize> {
        let n_below = self.intervals.partition_point(|ival| ival.lower <= x);
        n_below
            .checked_sub(1)
            .filter(|&ix| self.intervals[ix].contains(x))
    }
}
