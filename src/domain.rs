//! Domain noun set
//!
//! Nouns considered to be "about the product". Only adjective/noun pairs
//! whose noun lemma is in this set are counted.

use rustc_hash::FxHashSet;

/// Read-only set of lowercase domain nouns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainNounSet {
    nouns: FxHashSet<String>,
}

impl DomainNounSet {
    /// Nouns commonly used to describe a video game in store reviews
    pub const VIDEO_GAME_NOUNS: &'static [&'static str] = &[
        "game",
        "graphics",
        "gameplay",
        "story",
        "storyline",
        "plot",
        "character",
        "music",
        "soundtrack",
        "sound",
        "audio",
        "art",
        "visuals",
        "world",
        "level",
        "map",
        "combat",
        "control",
        "mechanic",
        "puzzle",
        "boss",
        "quest",
        "mission",
        "multiplayer",
        "campaign",
        "performance",
        "optimization",
        "dev",
        "developer",
        "price",
        "content",
        "experience",
        "atmosphere",
        "ending",
        "difficulty",
    ];

    /// Create an empty set (no pair will ever be counted)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a set from a list of nouns.
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn from_list<S: AsRef<str>>(nouns: &[S]) -> Self {
        nouns.iter().map(|n| n.as_ref()).collect()
    }

    /// The built-in video game noun list
    pub fn video_game() -> Self {
        Self::from_list(Self::VIDEO_GAME_NOUNS)
    }

    /// Add a noun to the set
    pub fn insert(&mut self, noun: &str) {
        let noun = noun.trim();
        if !noun.is_empty() {
            self.nouns.insert(noun.to_lowercase());
        }
    }

    /// Check if a noun lemma belongs to the domain
    pub fn contains(&self, lemma: &str) -> bool {
        self.nouns.contains(lemma)
    }

    /// Get the number of nouns in the set
    pub fn len(&self) -> usize {
        self.nouns.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for DomainNounSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::empty();
        for noun in iter {
            set.insert(noun);
        }
        set
    }
}
