//! Summarization components
//!
//! Deterministic top-K selection over the count tables and assembly of the
//! final [`assembler::Summary`].

pub mod assembler;
pub mod selector;
