//! Core types for review_descriptors
//!
//! This module defines the tagged token model consumed by the extraction
//! stages and the configuration that drives a summarization run.

use crate::domain::DomainNounSet;
use crate::errors::{DescriptorError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Token
// ============================================================================

/// Part-of-speech tags (universal tag set, as emitted by spaCy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "ADP")]
    Preposition,
    #[serde(rename = "CCONJ", alias = "SCONJ", alias = "CONJ")]
    Conjunction,
    #[serde(rename = "INTJ")]
    Interjection,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "PART")]
    Particle,
    #[serde(rename = "PUNCT")]
    Punctuation,
    #[serde(rename = "SYM")]
    Symbol,
    #[serde(rename = "PROPN")]
    ProperNoun,
    #[serde(rename = "X", alias = "SPACE", alias = "AUX")]
    Other,
}

impl PosTag {
    /// Check if this tag is an adjective
    pub fn is_adjective(&self) -> bool {
        matches!(self, PosTag::Adjective)
    }

    /// Check if this tag is a common noun. `PROPN` is not a noun here.
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun)
    }

    /// Parse from spaCy-style POS tag
    pub fn from_spacy(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "VERB" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Preposition,
            "CCONJ" | "SCONJ" | "CONJ" => PosTag::Conjunction,
            "INTJ" => PosTag::Interjection,
            "NUM" => PosTag::Numeral,
            "PART" => PosTag::Particle,
            "PUNCT" => PosTag::Punctuation,
            "SYM" => PosTag::Symbol,
            "PROPN" => PosTag::ProperNoun,
            _ => PosTag::Other,
        }
    }

    /// Get the spaCy-style POS tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Conjunction => "CCONJ",
            PosTag::Interjection => "INTJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PART",
            PosTag::Punctuation => "PUNCT",
            PosTag::Symbol => "SYM",
            PosTag::ProperNoun => "PROPN",
            PosTag::Other => "X",
        }
    }
}

/// A tagged token from one review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (original text)
    pub text: String,
    /// The lemmatized form (normalized)
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Whether this token is a stopword
    #[serde(default, alias = "is_stop")]
    pub is_stopword: bool,
    /// Whether the surface form consists only of alphabetic characters
    pub is_alpha: bool,
}

impl Token {
    /// Create a new token.
    ///
    /// The stopword flag starts cleared and the alphabetic flag is derived
    /// from `text`; taggers that know better override them with the
    /// `with_*` methods.
    pub fn new(text: impl Into<String>, lemma: impl Into<String>, pos: PosTag) -> Self {
        let text = text.into();
        let is_alpha = is_alphabetic(&text);
        Self {
            text,
            lemma: lemma.into(),
            pos,
            is_stopword: false,
            is_alpha,
        }
    }

    /// Set the stopword flag
    pub fn with_stopword(mut self, is_stopword: bool) -> Self {
        self.is_stopword = is_stopword;
        self
    }

    /// Set the alphabetic flag
    pub fn with_alpha(mut self, is_alpha: bool) -> Self {
        self.is_alpha = is_alpha;
        self
    }

    /// Length of the surface form in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// `true` if `text` is non-empty and every character is alphabetic
pub fn is_alphabetic(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

// ============================================================================
// Configuration
// ============================================================================

fn default_top_k() -> usize {
    5
}

fn default_domain_nouns() -> Vec<String> {
    DomainNounSet::VIDEO_GAME_NOUNS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Configuration for a summarization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Number of standalone adjectives to report
    #[serde(default = "default_top_k")]
    pub adjective_top_k: usize,
    /// Number of noun/adjective pairs to report
    #[serde(default = "default_top_k")]
    pub pair_top_k: usize,
    /// Nouns considered to be about the product
    #[serde(default = "default_domain_nouns")]
    pub domain_nouns: Vec<String>,
    /// Extra stopwords marked on tokens before extraction
    #[serde(default)]
    pub stopwords: Vec<String>,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            adjective_top_k: default_top_k(),
            pair_top_k: default_top_k(),
            domain_nouns: default_domain_nouns(),
            stopwords: Vec::new(),
        }
    }
}

impl SummaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a JSON object, filling omitted fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(DescriptorError::invalid_config(
                "config must be a JSON object",
            ));
        }
        let cfg: SummaryConfig = serde_json::from_value(value)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.adjective_top_k == 0 {
            return Err(DescriptorError::invalid_config(
                "adjective_top_k must be > 0",
            ));
        }

        if self.pair_top_k == 0 {
            return Err(DescriptorError::invalid_config("pair_top_k must be > 0"));
        }

        Ok(())
    }

    /// Build the domain noun set described by this config
    pub fn domain_noun_set(&self) -> DomainNounSet {
        DomainNounSet::from_list(&self.domain_nouns)
    }

    /// Builder method: set number of adjectives to report
    pub fn with_adjective_top_k(mut self, k: usize) -> Self {
        self.adjective_top_k = k;
        self
    }

    /// Builder method: set number of pairs to report
    pub fn with_pair_top_k(mut self, k: usize) -> Self {
        self.pair_top_k = k;
        self
    }

    /// Builder method: replace the domain nouns
    pub fn with_domain_nouns<I, S>(mut self, nouns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain_nouns = nouns.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = words.into_iter().map(Into::into).collect();
        self
    }
}
