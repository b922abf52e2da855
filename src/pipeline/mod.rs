//! Pipeline composition
//!
//! Stage traits, per-review artifacts, observer hooks and the runner that
//! drives a review collection through them.

pub mod artifacts;
pub mod observer;
pub mod runner;
pub mod traits;
