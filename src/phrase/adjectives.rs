//! Standalone adjective filter
//!
//! Decides which tokens contribute their lemma to the global adjective pool.

use crate::pipeline::traits::AdjectiveFilter;
use crate::types::Token;

/// The default adjective filter.
///
/// A token is kept when all of the following hold:
/// - it is tagged `ADJ`
/// - it is not a stopword
/// - its surface form is alphabetic
/// - its surface form is not a single character
/// - its lemma is ASCII
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAdjectiveFilter;

impl AdjectiveFilter for StandardAdjectiveFilter {
    fn accepts(&self, token: &Token) -> bool {
        token.pos.is_adjective()
            && !token.is_stopword
            && token.is_alpha
            && token.char_len() != 1
            && token.lemma.is_ascii()
    }
}
