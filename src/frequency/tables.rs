//! Count tables
//!
//! [`AdjectiveCounts`] is the flat adjective multiset; [`PairTable`] is the
//! two-level noun -> adjective -> count table. Both only ever grow.

use rustc_hash::FxHashMap;

/// Adjective lemma -> occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjectiveCounts {
    counts: FxHashMap<String, u64>,
}

impl AdjectiveCounts {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `adjective`
    pub fn increment(&mut self, adjective: &str) {
        match self.counts.get_mut(adjective) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(adjective.to_string(), 1);
            }
        }
    }

    /// Occurrences of `adjective` (0 if never seen)
    pub fn count(&self, adjective: &str) -> u64 {
        self.counts.get(adjective).copied().unwrap_or(0)
    }

    /// Iterate over (adjective, count) in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(adj, &count)| (adj.as_str(), count))
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct adjectives
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no adjective has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Counts for one domain noun
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NounEntry {
    total: u64,
    by_adjective: FxHashMap<String, u64>,
}

impl NounEntry {
    /// Number of pairs recorded for this noun
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Occurrences of `adjective` describing this noun
    pub fn count(&self, adjective: &str) -> u64 {
        self.by_adjective.get(adjective).copied().unwrap_or(0)
    }

    /// Iterate over (adjective, count) in arbitrary order
    pub fn adjectives(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.by_adjective
            .iter()
            .map(|(adj, &count)| (adj.as_str(), count))
    }

    /// Number of distinct adjectives describing this noun
    pub fn len(&self) -> usize {
        self.by_adjective.len()
    }

    /// Check if no adjective has been recorded
    pub fn is_empty(&self) -> bool {
        self.by_adjective.is_empty()
    }

    fn record(&mut self, adjective: &str) {
        self.total += 1;
        match self.by_adjective.get_mut(adjective) {
            Some(count) => *count += 1,
            None => {
                self.by_adjective.insert(adjective.to_string(), 1);
            }
        }
    }
}

/// Noun lemma -> [`NounEntry`].
///
/// Invariant: every entry's `total` equals the sum of its per-adjective
/// counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairTable {
    nouns: FxHashMap<String, NounEntry>,
}

impl PairTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `adjective` describing `noun`
    pub fn record(&mut self, adjective: &str, noun: &str) {
        if let Some(entry) = self.nouns.get_mut(noun) {
            entry.record(adjective);
            return;
        }
        let mut entry = NounEntry::default();
        entry.record(adjective);
        self.nouns.insert(noun.to_string(), entry);
    }

    /// Counts for `noun`, if it was ever recorded
    pub fn get(&self, noun: &str) -> Option<&NounEntry> {
        self.nouns.get(noun)
    }

    /// Check if `noun` has been recorded
    pub fn contains_noun(&self, noun: &str) -> bool {
        self.nouns.contains_key(noun)
    }

    /// Iterate over (noun, total) in arbitrary order
    pub fn noun_totals(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.nouns
            .iter()
            .map(|(noun, entry)| (noun.as_str(), entry.total))
    }

    /// Iterate over (noun, entry) in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NounEntry)> + '_ {
        self.nouns.iter().map(|(noun, entry)| (noun.as_str(), entry))
    }

    /// Number of distinct nouns
    pub fn len(&self) -> usize {
        self.nouns.len()
    }

    /// Check if no pair has been recorded
    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjective_counts() {
        let mut counts = AdjectiveCounts::new();
        counts.increment("fun");
        counts.increment("fun");
        counts.increment("short");

        assert_eq!(counts.count("fun"), 2);
        assert_eq!(counts.count("short"), 1);
        assert_eq!(counts.count("bad"), 0);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_pair_table_totals_match_adjective_sums() {
        let mut table = PairTable::new();
        table.record("great", "game");
        table.record("awesome", "game");
        table.record("great", "game");
        table.record("bad", "graphics");

        for (_, entry) in table.iter() {
            let sum: u64 = entry.adjectives().map(|(_, c)| c).sum();
            assert_eq!(entry.total(), sum);
        }

        let game = table.get("game").unwrap();
        assert_eq!(game.total(), 3);
        assert_eq!(game.count("great"), 2);
        assert_eq!(game.count("awesome"), 1);
        assert_eq!(game.len(), 2);
        assert_eq!(table.get("graphics").unwrap().total(), 1);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_pair_table_noun_totals() {
        let mut table = PairTable::new();
        table.record("long", "story");
        table.record("dull", "story");

        let totals: Vec<_> = table.noun_totals().collect();
        assert_eq!(totals, vec![("story", 2)]);
        assert!(table.contains_noun("story"));
        assert!(!table.contains_noun("long"));
    }

    #[test]
    fn test_empty_tables() {
        assert!(AdjectiveCounts::new().is_empty());
        assert!(PairTable::new().is_empty());
        assert!(PairTable::new().get("game").is_none());
    }
}
