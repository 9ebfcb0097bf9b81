//! Observed frequencies of a sample over a partition
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::partition::Partition;

/// Observed count per interval, in partition order.
///
/// Values that land in no interval are not counted anywhere. How many
/// were dropped is kept in `excluded`. Dropping them silently (rather than
/// failing) is a compatibility behavior of the half-open bin convention,
/// not a statement that such samples are valid.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct FrequencyTable {
    labels: Vec<String>,
    counts: Vec<usize>,
    excluded: usize,
}

impl FrequencyTable {
    /// Tally `xs` into the intervals of `partition`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use x2fit::partition::Partition;
    /// # use x2fit::frequency::FrequencyTable;
    /// let part = Partition::uniform(4).unwrap();
    /// let xs = [0.0, 0.1, 0.25, 0.6, 0.99, 1.0, -0.2];
    ///
    /// let freqs = FrequencyTable::count(&xs, &part);
    ///
    /// assert_eq!(freqs.counts(), &[2, 1, 1, 1]);
    /// assert_eq!(freqs.excluded(), 2);
    /// assert_eq!(freqs.get("0.0 - 0.25"), Some(2));
    /// ```
    pub fn count(xs: &[f64], partition: &Partition) -> Self {
        let mut counts = vec![0_usize; partition.k()];
        let excluded = xs.iter().fold(0, |excluded, &x| {
            match partition.locate(x) {
                Some(ix) => {
                    counts[ix] += 1;
                    excluded
                }
                None => excluded + 1,
            }
        });

        FrequencyTable {
            labels: partition.labels().map(String::from).collect(),
            counts,
            excluded,
        }
    }

    /// The number of intervals
    #[inline]
    pub fn k(&self) -> usize {
        self.counts.len()
    }

    /// Observed counts in interval order
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The number of values that fell in no interval
    #[inline]
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// The number of values counted in some interval
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Count of the interval with the given label
    pub fn get(&self, label: &str) -> Option<usize> {
        self.labels
            .iter()
            .position(|lbl| lbl == label)
            .map(|ix| self.counts[ix])
    }

    /// `(label, count)` pairs in interval order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}
