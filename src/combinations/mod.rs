//! Pair enumeration - which sources get compared with which
//!
//! For N sources there are N·(N−1)/2 unordered pairs. They are enumerated
//! in a fixed order the reporting layer relies on: (0,1), (0,2), ...,
//! (0,N−1), (1,2), ..., (N−2,N−1).

use crate::types::{Pair, Verdict};

/// Number of unordered pairs formed by `elements` sources.
///
/// Accumulates the triangular sum iteratively rather than using the closed
/// form, so no intermediate value ever exceeds the final pair count.
/// Returns 0 for fewer than two elements; callers must treat a comparison
/// over fewer than two sources as a configuration problem, not an
/// enumeration failure.
///
/// # Example
/// ```
/// use cmpy::combinations::count_combinations;
///
/// assert_eq!(count_combinations(4), 6);
/// assert_eq!(count_combinations(1), 0);
/// ```
pub fn count_combinations(elements: usize) -> usize {
    let mut remaining = elements;
    let mut combinations = 0;

    while remaining > 0 {
        remaining -= 1;
        combinations += remaining;
    }

    combinations
}

/// The ordered pair table for one comparison session, with one verdict
/// slot per pair.
///
/// Pairs and verdicts are kept as parallel vectors indexed by position;
/// position addressing is part of the public contract (see [`get`] and
/// [`verdict`]).
///
/// [`get`]: CombinationSet::get
/// [`verdict`]: CombinationSet::verdict
#[derive(Debug)]
pub struct CombinationSet {
    elements: usize,
    pairs: Vec<Pair>,
    verdicts: Vec<Verdict>,
}

impl CombinationSet {
    /// Build the pair table for `elements` sources, every verdict Unknown.
    pub fn new(elements: usize) -> Self {
        let total = count_combinations(elements);
        let mut pairs = Vec::with_capacity(total);

        for a in 0..elements {
            for b in (a + 1)..elements {
                pairs.push(Pair::new(a, b));
            }
        }

        Self {
            elements,
            pairs,
            verdicts: vec![Verdict::Unknown; total],
        }
    }

    /// Number of sources this table was built for.
    pub fn elements(&self) -> usize {
        self.elements
    }

    /// Number of pairs in the table.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table holds no pairs (fewer than two elements).
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pair at `position` in enumeration order, or `None` when the
    /// position is out of range.
    pub fn get(&self, position: usize) -> Option<Pair> {
        self.pairs.get(position).copied()
    }

    /// Overwrite the pair at `position`. Returns false when the position
    /// is out of range; the table is left untouched in that case.
    pub fn set(&mut self, position: usize, pair: Pair) -> bool {
        match self.pairs.get_mut(position) {
            Some(slot) => {
                *slot = pair;
                true
            }
            None => false,
        }
    }

    /// Verdict of the pair at `position`, or `None` when the position is
    /// out of range.
    pub fn verdict(&self, position: usize) -> Option<Verdict> {
        self.verdicts.get(position).copied()
    }

    /// Record a verdict for the pair at `position`. Returns false when
    /// the position is out of range.
    pub fn record(&mut self, position: usize, verdict: Verdict) -> bool {
        match self.verdicts.get_mut(position) {
            Some(slot) => {
                *slot = verdict;
                true
            }
            None => false,
        }
    }

    /// Regenerate every pair in enumeration order and reset all verdicts
    /// to Unknown. Fails (returns false) when the table was built for zero
    /// elements.
    pub fn rebuild(&mut self) -> bool {
        if self.elements == 0 {
            return false;
        }

        let mut position = 0;
        for a in 0..self.elements {
            for b in (a + 1)..self.elements {
                self.set(position, Pair::new(a, b));
                position += 1;
            }
        }

        for verdict in self.verdicts.iter_mut() {
            *verdict = Verdict::Unknown;
        }

        true
    }
}
