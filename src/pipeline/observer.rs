//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, inspecting per-review
//! extractions and capturing the final count tables.

use std::time::{Duration, Instant};

use crate::frequency::tables::{AdjectiveCounts, PairTable};
use crate::pipeline::artifacts::ReviewExtraction;

/// Tagging, preprocessing, extraction and aggregation over all reviews.
pub const STAGE_EXTRACT: &str = "extract";
/// Top-K selection over both tables.
pub const STAGE_SELECT: &str = "select";
/// Packaging of the summary.
pub const STAGE_ASSEMBLE: &str = "assemble";

/// Measures one stage's wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    start: Instant,
}

impl StageClock {
    /// Start timing now
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Time elapsed since [`StageClock::start`]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// What a stage reports when it ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReport {
    /// Wall-clock time spent in the stage
    pub elapsed: Duration,
    /// Number of items the stage produced or consumed, when meaningful
    pub items: Option<usize>,
}

impl StageReport {
    /// Create a report with no item count
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach an item count
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }
}

/// Receives pipeline events. Every method defaults to a no-op.
pub trait PipelineObserver {
    /// A stage is about to run
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// One review was extracted (called in review order, 0-based index)
    fn on_review(&mut self, _index: usize, _extraction: &ReviewExtraction) {}

    /// All reviews were aggregated
    fn on_tables(&mut self, _adjectives: &AdjectiveCounts, _pairs: &PairTable) {}
}

/// Ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records stage timings in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    timings: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded (stage, report) entries in execution order
    pub fn timings(&self) -> &[(&'static str, StageReport)] {
        &self.timings
    }

    /// Sum of all recorded stage durations
    pub fn total(&self) -> Duration {
        self.timings.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.timings.push((stage, *report));
    }
}
