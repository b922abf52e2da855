//! Tagger seam
//!
//! Part-of-speech tagging and lemmatization are provided by an external
//! service. The pipeline receives it as a [`Tagger`] at call time, so tests
//! and offline runs can substitute the lightweight implementations below.

use super::stopwords::StopwordFilter;
use crate::errors::{DescriptorError, Result};
use crate::types::{PosTag, Token};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

/// A tagging service: turns raw review text into tagged tokens
pub trait Tagger {
    /// Tag one review
    fn tag(&self, text: &str) -> Result<Vec<Token>>;
}

impl<T: Tagger + ?Sized> Tagger for &T {
    fn tag(&self, text: &str) -> Result<Vec<Token>> {
        (**self).tag(text)
    }
}

// ============================================================================
// LexiconTagger
// ============================================================================

/// Lemma and POS for one lexicon word
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LexiconEntry {
    pub lemma: String,
    #[serde(deserialize_with = "deserialize_pos")]
    pub pos: PosTag,
}

fn deserialize_pos<'de, D>(deserializer: D) -> std::result::Result<PosTag, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tag = String::deserialize(deserializer)?;
    Ok(PosTag::from_spacy(&tag))
}

/// Dictionary-driven tagger.
///
/// Splits text on Unicode word boundaries into words and punctuation/symbol
/// marks, then looks words up (case-insensitively) in a word -> (lemma, POS) lexicon.
/// Words missing from the lexicon are tagged [`PosTag::Other`] with their
/// lowercase form as lemma.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: FxHashMap<String, LexiconEntry>,
    stopwords: StopwordFilter,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    /// Create an empty tagger with English stopwords
    pub fn new() -> Self {
        Self {
            lexicon: FxHashMap::default(),
            stopwords: StopwordFilter::default(),
        }
    }

    /// Parse a lexicon of the form `{"word": {"lemma": "...", "pos": "ADJ"}}`
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: FxHashMap<String, LexiconEntry> = serde_json::from_str(json)?;
        let mut tagger = Self::new();
        for (word, entry) in entries {
            tagger.lexicon.insert(word.to_lowercase(), entry);
        }
        Ok(tagger)
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Add a word to the lexicon
    pub fn with_word(mut self, word: &str, lemma: &str, pos: PosTag) -> Self {
        self.insert(word, lemma, pos);
        self
    }

    /// Add a word to the lexicon
    pub fn insert(&mut self, word: &str, lemma: &str, pos: PosTag) {
        self.lexicon.insert(
            word.to_lowercase(),
            LexiconEntry {
                lemma: lemma.to_string(),
                pos,
            },
        );
    }

    /// Get the number of lexicon words
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// Check if the lexicon is empty
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    fn tag_word(&self, word: &str) -> Token {
        let key = word.to_lowercase();
        let token = match self.lexicon.get(&key) {
            Some(entry) => Token::new(word, entry.lemma.clone(), entry.pos),
            None => Token::new(word, key, PosTag::Other),
        };
        let is_stop = self.stopwords.is_stopword(word);
        token.with_stopword(is_stop)
    }

    fn tag_mark(&self, mark: &str) -> Token {
        let pos = if mark.chars().all(|c| c.is_ascii_punctuation()) {
            PosTag::Punctuation
        } else {
            PosTag::Symbol
        };
        Token::new(mark, mark, pos)
    }
}

/// Split text on UAX #29 word boundaries.
///
/// Whitespace pieces are dropped. Pieces holding a letter or digit are
/// words ("don't", "10.5"); every other piece is a mark.
fn segment(text: &str) -> Vec<Segment<'_>> {
    text.split_word_bounds()
        .filter(|piece| !piece.chars().all(char::is_whitespace))
        .map(|piece| {
            if piece.chars().any(char::is_alphanumeric) {
                Segment::Word(piece)
            } else {
                Segment::Mark(piece)
            }
        })
        .collect()
}

enum Segment<'a> {
    Word(&'a str),
    Mark(&'a str),
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Result<Vec<Token>> {
        Ok(segment(text)
            .into_iter()
            .map(|seg| match seg {
                Segment::Word(word) => self.tag_word(word),
                Segment::Mark(mark) => self.tag_mark(mark),
            })
            .collect())
    }
}

// ============================================================================
// PretaggedTagger
// ============================================================================

#[derive(Deserialize)]
struct PretaggedReview {
    text: String,
    tokens: Vec<Token>,
}

/// Replays tokens tagged ahead of time (e.g. exported from spaCy).
///
/// Looking up text that was never recorded is an error.
#[derive(Debug, Clone, Default)]
pub struct PretaggedTagger {
    reviews: FxHashMap<String, Vec<Token>>,
}

impl PretaggedTagger {
    /// Create an empty tagger
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `[{"text": "...", "tokens": [...]}, ...]`
    pub fn from_json(json: &str) -> Result<Self> {
        let reviews: Vec<PretaggedReview> = serde_json::from_str(json)?;
        let mut tagger = Self::new();
        for review in reviews {
            tagger.insert(review.text, review.tokens);
        }
        Ok(tagger)
    }

    /// Record the tokens for one review text
    pub fn insert(&mut self, text: impl Into<String>, tokens: Vec<Token>) {
        self.reviews.insert(text.into(), tokens);
    }

    /// Builder form of [`PretaggedTagger::insert`]
    pub fn with_review(mut self, text: impl Into<String>, tokens: Vec<Token>) -> Self {
        self.insert(text, tokens);
        self
    }

    /// Get the number of recorded reviews
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Check if no reviews are recorded
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

impl Tagger for PretaggedTagger {
    fn tag(&self, text: &str) -> Result<Vec<Token>> {
        self.reviews.get(text).cloned().ok_or_else(|| {
            DescriptorError::tagger(format!("no pre-tagged tokens for review {text:?}"))
        })
    }
}
