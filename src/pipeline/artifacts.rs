//! Pipeline artifacts.
//!
//! Typed intermediate results flowing between pipeline stages. Per-review
//! artifacts are owned so they can be handed to observers after the review's
//! tokens are dropped.

use serde::{Deserialize, Serialize};

use crate::domain::DomainNounSet;
use crate::errors::Result;
use crate::nlp::stopwords::StopwordFilter;
use crate::types::SummaryConfig;

/// Lookup sets derived once per run from a validated [`SummaryConfig`]
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Domain nouns gating the pair pool
    pub nouns: DomainNounSet,
    /// Extra stopwords from [`SummaryConfig::stopwords`]
    pub stopwords: StopwordFilter,
}

impl RunContext {
    /// Validate `cfg` and build its lookup sets
    pub fn new(cfg: &SummaryConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            nouns: cfg.domain_noun_set(),
            stopwords: StopwordFilter::from_list(&cfg.stopwords),
        })
    }
}

/// One (adjective, noun) occurrence found by a pair matcher
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescriptorMatch {
    /// Adjective lemma
    pub adjective: String,
    /// Noun lemma (always a domain noun)
    pub noun: String,
}

impl DescriptorMatch {
    /// Create a new match
    pub fn new(adjective: impl Into<String>, noun: impl Into<String>) -> Self {
        Self {
            adjective: adjective.into(),
            noun: noun.into(),
        }
    }
}

/// Everything extracted from a single review
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewExtraction {
    /// Adjective lemmas that passed the adjective filter, in token order
    pub adjectives: Vec<String>,
    /// Adjective/noun pairs, in token order
    pub pairs: Vec<DescriptorMatch>,
}

impl ReviewExtraction {
    /// Check if nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.adjectives.is_empty() && self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DescriptorError;

    #[test]
    fn test_run_context_builds_lookup_sets() {
        let cfg = SummaryConfig::default()
            .with_domain_nouns(["Game", "story"])
            .with_stopwords(["Meh", "okay"]);
        let ctx = RunContext::new(&cfg).unwrap();

        assert_eq!(ctx.nouns.len(), 2);
        assert!(ctx.nouns.contains("game"));
        assert_eq!(ctx.stopwords.len(), 2);
        assert!(ctx.stopwords.is_stopword("meh"));
    }

    #[test]
    fn test_run_context_rejects_invalid_config() {
        let cfg = SummaryConfig::default().with_pair_top_k(0);
        assert!(matches!(
            RunContext::new(&cfg),
            Err(DescriptorError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_extraction() {
        let mut extraction = ReviewExtraction::default();
        assert!(extraction.is_empty());
        extraction.pairs.push(DescriptorMatch::new("fun", "game"));
        assert!(!extraction.is_empty());
    }
}
