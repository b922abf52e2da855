//! Summary assembly
//!
//! Runs the top-K selector over both count tables and packages the result.
//! The serialized shape matches the summary files written by the original
//! review scraper: `{"top_5_adjs": [...], "top_5_pairs": [[noun, adj], ...]}`.

use super::selector::select_top_k;
use crate::errors::Result;
use crate::frequency::tables::{AdjectiveCounts, PairTable};
use crate::types::SummaryConfig;
use serde::{Deserialize, Serialize};

/// A domain noun with its most frequent adjective.
///
/// Serialized as a two-element array `[noun, adjective]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescriptorPair(pub String, pub String);

impl DescriptorPair {
    /// Create a new pair
    pub fn new(noun: impl Into<String>, adjective: impl Into<String>) -> Self {
        Self(noun.into(), adjective.into())
    }

    /// The domain noun
    pub fn noun(&self) -> &str {
        &self.0
    }

    /// The best adjective for the noun
    pub fn adjective(&self) -> &str {
        &self.1
    }
}

/// Descriptive summary of a review collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Most frequent standalone adjectives, best first
    #[serde(rename = "top_5_adjs")]
    pub top_adjectives: Vec<String>,
    /// Most described domain nouns with their best adjective, best first
    #[serde(rename = "top_5_pairs")]
    pub top_pairs: Vec<DescriptorPair>,
}

impl Summary {
    /// Package selector output
    pub fn assemble<A, P>(adjectives: A, pairs: P) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        P: IntoIterator<Item = DescriptorPair>,
    {
        Self {
            top_adjectives: adjectives.into_iter().map(Into::into).collect(),
            top_pairs: pairs.into_iter().collect(),
        }
    }

    /// Check if both lists are empty
    pub fn is_empty(&self) -> bool {
        self.top_adjectives.is_empty() && self.top_pairs.is_empty()
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Best adjective for each of the top `k` nouns, in noun ranking order
pub fn top_pairs(pairs: &PairTable, k: usize) -> Vec<DescriptorPair> {
    select_top_k(pairs.noun_totals(), k)
        .into_iter()
        .filter_map(|noun| {
            let entry = pairs.get(noun)?;
            let best = select_top_k(entry.adjectives(), 1).into_iter().next()?;
            Some(DescriptorPair::new(noun, best))
        })
        .collect()
}

/// Run the top-K selector over both tables with the configured limits.
///
/// The result feeds [`Summary::assemble`].
pub fn select_tables<'a>(
    adjectives: &'a AdjectiveCounts,
    pairs: &PairTable,
    cfg: &SummaryConfig,
) -> (Vec<&'a str>, Vec<DescriptorPair>) {
    (
        select_top_k(adjectives.iter(), cfg.adjective_top_k),
        top_pairs(pairs, cfg.pair_top_k),
    )
}
