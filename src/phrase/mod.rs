//! Descriptor extraction components
//!
//! This module provides the standalone adjective filter and the
//! adjacent adjective/noun pair matcher.

pub mod adjectives;
pub mod pairs;
