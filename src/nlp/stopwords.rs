//! Stopword filtering
//!
//! Stopword lists come from the `stop-words` crate and can be extended with
//! custom words. Lookups are case-insensitive.

use crate::types::Token;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of stopwords used to flag tokens
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language.
    ///
    /// Unknown language codes fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Flag every token whose surface form or lemma is a stopword.
    ///
    /// Flags already set are left untouched. Returns the number of tokens
    /// newly flagged.
    pub fn mark_tokens(&self, tokens: &mut [Token]) -> usize {
        let mut marked = 0;
        for token in tokens.iter_mut().filter(|t| !t.is_stopword) {
            if self.is_stopword(&token.text) || self.is_stopword(&token.lemma) {
                token.is_stopword = true;
                marked += 1;
            }
        }
        marked
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "pl" | "polish" => LANGUAGE::Polish,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}
