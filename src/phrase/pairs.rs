//! Adjective/noun pair matching
//!
//! Finds descriptors of the form ADJ NOUN on directly adjacent tokens.
//! Pattern: (ADJ) (NOUN), no gap allowed.

use crate::domain::DomainNounSet;
use crate::pipeline::artifacts::DescriptorMatch;
use crate::pipeline::traits::PairMatcher;
use crate::types::Token;

/// Strict two-token ADJ NOUN matcher.
///
/// Every qualifying occurrence is emitted; nothing is deduplicated.
/// Punctuation is not filtered here, so whatever the tagger labels as
/// ADJ/NOUN is taken at face value.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentPairMatcher;

impl AdjacentPairMatcher {
    /// Check whether two adjacent tokens form the ADJ NOUN pattern
    pub fn is_match(first: &Token, second: &Token) -> bool {
        first.pos.is_adjective() && second.pos.is_noun()
    }
}

impl PairMatcher for AdjacentPairMatcher {
    fn find_pairs(&self, tokens: &[Token], nouns: &DomainNounSet) -> Vec<DescriptorMatch> {
        tokens
            .windows(2)
            .filter(|w| Self::is_match(&w[0], &w[1]))
            .filter(|w| nouns.contains(&w[1].lemma))
            .map(|w| DescriptorMatch::new(w[0].lemma.as_str(), w[1].lemma.as_str()))
            .collect()
    }
}
