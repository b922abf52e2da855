//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one per-review processing stage boundary.
//! Implementations are statically dispatched by [`super::runner::Pipeline`];
//! trait objects work as well for dynamic composition.

use crate::domain::DomainNounSet;
use crate::pipeline::artifacts::{DescriptorMatch, RunContext};
use crate::types::Token;

// ============================================================================
// Preprocessor: optional token normalization (stage 0)
// ============================================================================

/// Optional preprocessing stage run on each review's tokens before
/// extraction.
///
/// # Contract
///
/// - **Input**: the review's tokens, mutable in place.
/// - **Idempotent**: calling `preprocess` twice should produce the same
///   result as calling it once.
pub trait Preprocessor {
    /// Preprocess the tokens in place.
    fn preprocess(&self, tokens: &mut [Token], ctx: &RunContext);
}

/// No-op preprocessor. Configured extra stopwords are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreprocessor;

impl Preprocessor for NoopPreprocessor {
    #[inline]
    fn preprocess(&self, _tokens: &mut [Token], _ctx: &RunContext) {}
}

/// Marks tokens matching the configured extra stopwords
/// ([`crate::types::SummaryConfig::stopwords`]). The default preprocessor.
///
/// Only the adjective pool honours the stopword flag; pairs are unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordPreprocessor;

impl Preprocessor for StopwordPreprocessor {
    fn preprocess(&self, tokens: &mut [Token], ctx: &RunContext) {
        if ctx.stopwords.is_empty() {
            return;
        }
        ctx.stopwords.mark_tokens(tokens);
    }
}

// ============================================================================
// AdjectiveFilter: standalone adjective pool (stage 1a)
// ============================================================================

/// Per-token decision for the standalone adjective pool.
pub trait AdjectiveFilter {
    /// Whether the token's lemma belongs in the adjective pool.
    fn accepts(&self, token: &Token) -> bool;

    /// Lemmas of every accepted token, in order.
    fn collect<'t>(&self, tokens: &'t [Token]) -> Vec<&'t str> {
        tokens
            .iter()
            .filter(|t| self.accepts(t))
            .map(|t| t.lemma.as_str())
            .collect()
    }
}

// ============================================================================
// PairMatcher: adjective/noun pair pool (stage 1b)
// ============================================================================

/// Finds adjective/noun descriptors in one review, gated by the domain
/// noun set.
pub trait PairMatcher {
    /// Every qualifying pair occurrence, in token order.
    fn find_pairs(&self, tokens: &[Token], nouns: &DomainNounSet) -> Vec<DescriptorMatch>;
}
