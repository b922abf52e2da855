//! # review_descriptors
//!
//! Summarize a collection of product reviews by the words used to describe
//! the product:
//!
//! - the most frequent standalone adjectives, and
//! - the most described domain nouns ("game", "graphics", ...), each with the
//!   adjective most often placed directly in front of it.
//!
//! Tagging (tokenization, POS, lemmas, stopword flags) is delegated to a
//! [`Tagger`] supplied by the caller. Selection is deterministic: equal
//! counts are ordered alphabetically, so the same input always produces the
//! same [`Summary`].
//!
//! ```
//! use review_descriptors::{
//!     summarize_reviews, LexiconTagger, PosTag, StopwordFilter, SummaryConfig,
//! };
//!
//! let tagger = LexiconTagger::new()
//!     .with_stopwords(StopwordFilter::from_list(&["the", "a"]))
//!     .with_word("great", "great", PosTag::Adjective)
//!     .with_word("awesome", "awesome", PosTag::Adjective)
//!     .with_word("bad", "bad", PosTag::Adjective)
//!     .with_word("game", "game", PosTag::Noun)
//!     .with_word("graphics", "graphics", PosTag::Noun);
//! let cfg = SummaryConfig::default().with_domain_nouns(["game", "graphics"]);
//!
//! let summary =
//!     summarize_reviews(&["great game", "awesome game", "bad graphics"], &tagger, &cfg)?;
//!
//! assert_eq!(summary.top_adjectives, ["awesome", "bad", "great"]);
//! assert_eq!(summary.top_pairs[0].noun(), "game");
//! assert_eq!(summary.top_pairs[0].adjective(), "awesome");
//! # Ok::<(), review_descriptors::DescriptorError>(())
//! ```

pub mod domain;
pub mod errors;
pub mod frequency;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use domain::DomainNounSet;
pub use errors::{DescriptorError, Result};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tagger::{LexiconTagger, PretaggedTagger, Tagger};
pub use pipeline::observer::NoopObserver;
pub use pipeline::runner::{Pipeline, PipelineBuilder, StandardPipeline};
pub use summarizer::assembler::{DescriptorPair, Summary};
pub use summarizer::selector::select_top_k;
pub use types::{PosTag, SummaryConfig, Token};

/// Summarize `reviews` with the standard pipeline.
pub fn summarize_reviews<S, T>(reviews: &[S], tagger: &T, cfg: &SummaryConfig) -> Result<Summary>
where
    S: AsRef<str>,
    T: Tagger + ?Sized,
{
    StandardPipeline::standard().run(reviews, tagger, cfg, &mut NoopObserver)
}
