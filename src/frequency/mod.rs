//! Frequency aggregation
//!
//! Count tables for standalone adjectives and domain noun descriptors, and
//! the aggregator that fills them across a review collection.

pub mod aggregator;
pub mod tables;
