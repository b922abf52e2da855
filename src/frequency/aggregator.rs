//! Frequency aggregation across a review collection

use super::tables::{AdjectiveCounts, PairTable};
use crate::pipeline::artifacts::ReviewExtraction;
use tracing::debug;

/// Accumulates adjective and pair counts over every review of a run
#[derive(Debug, Clone, Default)]
pub struct FrequencyAggregator {
    adjectives: AdjectiveCounts,
    pairs: PairTable,
    reviews: usize,
}

impl FrequencyAggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one adjective occurrence
    pub fn add_adjective(&mut self, adjective: &str) {
        self.adjectives.increment(adjective);
    }

    /// Count one (adjective, noun) occurrence
    pub fn add_pair(&mut self, adjective: &str, noun: &str) {
        self.pairs.record(adjective, noun);
    }

    /// Fold one review's extraction into the tables
    pub fn add_review(&mut self, extraction: &ReviewExtraction) {
        for adjective in &extraction.adjectives {
            self.add_adjective(adjective);
        }
        for pair in &extraction.pairs {
            self.add_pair(&pair.adjective, &pair.noun);
        }
        self.reviews += 1;

        debug!(
            review = self.reviews,
            adjectives = extraction.adjectives.len(),
            pairs = extraction.pairs.len(),
            "aggregated review"
        );
    }

    /// The adjective table so far
    pub fn adjectives(&self) -> &AdjectiveCounts {
        &self.adjectives
    }

    /// The pair table so far
    pub fn pairs(&self) -> &PairTable {
        &self.pairs
    }

    /// Number of reviews folded in
    pub fn reviews(&self) -> usize {
        self.reviews
    }

    /// Consume the aggregator, returning both tables
    pub fn into_tables(self) -> (AdjectiveCounts, PairTable) {
        (self.adjectives, self.pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::artifacts::DescriptorMatch;

    fn extraction(adjectives: &[&str], pairs: &[(&str, &str)]) -> ReviewExtraction {
        ReviewExtraction {
            adjectives: adjectives.iter().map(|s| s.to_string()).collect(),
            pairs: pairs
                .iter()
                .map(|(adj, noun)| DescriptorMatch::new(*adj, *noun))
                .collect(),
        }
    }

    #[test]
    fn test_counts_span_reviews() {
        let mut agg = FrequencyAggregator::new();
        agg.add_review(&extraction(&["great"], &[("great", "game")]));
        agg.add_review(&extraction(&["awesome", "great"], &[("awesome", "game")]));
        agg.add_review(&extraction(&["bad"], &[("bad", "graphics")]));

        assert_eq!(agg.reviews(), 3);
        assert_eq!(agg.adjectives().count("great"), 2);
        assert_eq!(agg.adjectives().count("awesome"), 1);
        assert_eq!(agg.adjectives().count("bad"), 1);

        let game = agg.pairs().get("game").unwrap();
        assert_eq!(game.total(), 2);
        assert_eq!(game.count("great"), 1);
        assert_eq!(game.count("awesome"), 1);
        assert_eq!(agg.pairs().get("graphics").unwrap().count("bad"), 1);
    }

    #[test]
    fn test_pools_are_independent() {
        // A pair adjective that failed the adjective filter still counts
        // towards its noun.
        let mut agg = FrequencyAggregator::new();
        agg.add_review(&extraction(&[], &[("other", "game")]));

        assert!(agg.adjectives().is_empty());
        assert_eq!(agg.pairs().get("game").unwrap().count("other"), 1);
    }

    #[test]
    fn test_empty_reviews() {
        let mut agg = FrequencyAggregator::new();
        agg.add_review(&ReviewExtraction::default());

        let (adjectives, pairs) = agg.into_tables();
        assert!(adjectives.is_empty());
        assert!(pairs.is_empty());
    }
}
