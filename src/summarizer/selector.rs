//! Deterministic top-K selection over count tables
//!
//! Keeps the `k` best entries in a bounded min-heap, O(n log k). Entries are
//! ordered by count descending; equal counts are ordered by term ascending
//! (byte-wise), so the result never depends on hash iteration order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A term with its count, ordered so that "greater" means "ranks higher"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedTerm<'a> {
    pub term: &'a str,
    pub count: u64,
}

impl<'a> RankedTerm<'a> {
    /// Create a new ranked term
    pub fn new(term: &'a str, count: u64) -> Self {
        Self { term, count }
    }
}

impl Ord for RankedTerm<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            // Smaller term ranks higher on equal counts.
            .then_with(|| other.term.cmp(self.term))
    }
}

impl PartialOrd for RankedTerm<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Bounded "k largest by count" selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopKSelector {
    k: usize,
}

impl TopKSelector {
    /// Create a selector keeping at most `k` entries
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Maximum number of entries returned
    pub fn k(&self) -> usize {
        self.k
    }

    /// Select the best `k` entries, best first.
    ///
    /// Returns `min(k, n)` entries; `k == 0` yields nothing. Terms are
    /// expected to be distinct.
    pub fn select<'a, I>(&self, counts: I) -> Vec<RankedTerm<'a>>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        if self.k == 0 {
            return Vec::new();
        }

        // Min-heap on rank: the worst kept entry sits on top.
        let mut heap: BinaryHeap<Reverse<RankedTerm<'a>>> = BinaryHeap::new();

        for (term, count) in counts {
            let candidate = RankedTerm::new(term, count);
            if heap.len() < self.k {
                heap.push(Reverse(candidate));
            } else if heap.peek().is_some_and(|Reverse(worst)| candidate > *worst) {
                heap.pop();
                heap.push(Reverse(candidate));
            }
        }

        // Ascending on Reverse == descending on rank.
        heap.into_sorted_vec()
            .into_iter()
            .map(|Reverse(ranked)| ranked)
            .collect()
    }
}

/// Terms of the `k` largest entries, best first
pub fn select_top_k<'a, I>(counts: I, k: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    TopKSelector::new(k)
        .select(counts)
        .into_iter()
        .map(|ranked| ranked.term)
        .collect()
}
