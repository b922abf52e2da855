//! Natural Language Processing components
//!
//! This module provides the tagger seam and stopword filtering.

pub mod stopwords;
pub mod tagger;
