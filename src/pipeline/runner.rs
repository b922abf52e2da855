//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of per-review
//! stages. Calling [`Pipeline::run`] tags and extracts every review,
//! aggregates the counts, then selects and assembles the summary once,
//! notifying a [`PipelineObserver`] at each boundary.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over its stage types, so every combination is
//! monomorphized. The default stages are zero-sized.

use tracing::debug;

use crate::errors::Result;
use crate::frequency::aggregator::FrequencyAggregator;
use crate::nlp::tagger::Tagger;
use crate::phrase::adjectives::StandardAdjectiveFilter;
use crate::phrase::pairs::AdjacentPairMatcher;
use crate::pipeline::artifacts::{ReviewExtraction, RunContext};
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_ASSEMBLE, STAGE_EXTRACT, STAGE_SELECT,
};
use crate::pipeline::traits::{AdjectiveFilter, PairMatcher, Preprocessor, StopwordPreprocessor};
use crate::summarizer::assembler::{select_tables, Summary};
use crate::types::{SummaryConfig, Token};

/// Enter a tracing span for a pipeline stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline: statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `Pre` | [`Preprocessor`] | [`StopwordPreprocessor`] |
/// | `AF`  | [`AdjectiveFilter`] | [`StandardAdjectiveFilter`] |
/// | `PM`  | [`PairMatcher`] | [`AdjacentPairMatcher`] |
#[derive(Debug, Clone)]
pub struct Pipeline<Pre, AF, PM> {
    pub preprocessor: Pre,
    pub adjective_filter: AF,
    pub pair_matcher: PM,
}

/// Type alias for the default pipeline.
pub type StandardPipeline =
    Pipeline<StopwordPreprocessor, StandardAdjectiveFilter, AdjacentPairMatcher>;

impl StandardPipeline {
    /// Build the default pipeline:
    /// - configured extra stopwords marked before extraction
    /// - standard adjective filter
    /// - strict adjacent ADJ NOUN matcher
    pub fn standard() -> Self {
        Pipeline {
            preprocessor: StopwordPreprocessor,
            adjective_filter: StandardAdjectiveFilter,
            pair_matcher: AdjacentPairMatcher,
        }
    }
}

impl Default for StandardPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Pipeline::run: execute stages in order
// ============================================================================

impl<Pre, AF, PM> Pipeline<Pre, AF, PM>
where
    Pre: Preprocessor,
    AF: AdjectiveFilter,
    PM: PairMatcher,
{
    /// Preprocess one review's tokens and extract both pools.
    pub fn extract_review(&self, tokens: &mut [Token], ctx: &RunContext) -> ReviewExtraction {
        self.preprocessor.preprocess(tokens, ctx);
        ReviewExtraction {
            adjectives: self
                .adjective_filter
                .collect(tokens)
                .into_iter()
                .map(str::to_string)
                .collect(),
            pairs: self.pair_matcher.find_pairs(tokens, &ctx.nouns),
        }
    }

    /// Summarize raw reviews, tagging each one with `tagger`.
    ///
    /// Reviews are tagged and extracted one at a time, in order. The first
    /// tagger error aborts the run and is returned unchanged.
    pub fn run<S, T>(
        &self,
        reviews: &[S],
        tagger: &T,
        cfg: &SummaryConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary>
    where
        S: AsRef<str>,
        T: Tagger + ?Sized,
    {
        self.run_documents(
            reviews.iter().map(|review| tagger.tag(review.as_ref())),
            cfg,
            observer,
        )
    }

    /// Summarize reviews that were already tagged.
    pub fn run_tagged<I>(
        &self,
        documents: I,
        cfg: &SummaryConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary>
    where
        I: IntoIterator<Item = Vec<Token>>,
    {
        self.run_documents(documents.into_iter().map(Ok), cfg, observer)
    }

    /// Stages run in order:
    /// 1. Extract (per review: preprocess, filter adjectives, match pairs,
    ///    aggregate)
    /// 2. Select (top-K over both tables)
    /// 3. Assemble
    fn run_documents<I>(
        &self,
        documents: I,
        cfg: &SummaryConfig,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary>
    where
        I: Iterator<Item = Result<Vec<Token>>>,
    {
        let ctx = RunContext::new(cfg)?;

        // Stage 1: Extract and aggregate
        let aggregator = {
            trace_stage!(STAGE_EXTRACT);
            observer.on_stage_start(STAGE_EXTRACT);
            let clock = StageClock::start();
            let mut aggregator = FrequencyAggregator::new();
            for (index, document) in documents.enumerate() {
                let mut tokens = document?;
                let extraction = self.extract_review(&mut tokens, &ctx);
                aggregator.add_review(&extraction);
                observer.on_review(index, &extraction);
            }
            let report = StageReport::new(clock.elapsed()).with_items(aggregator.reviews());
            observer.on_stage_end(STAGE_EXTRACT, &report);
            observer.on_tables(aggregator.adjectives(), aggregator.pairs());
            aggregator
        };

        debug!(
            reviews = aggregator.reviews(),
            adjectives = aggregator.adjectives().len(),
            nouns = aggregator.pairs().len(),
            "count tables built"
        );

        // Stage 2: Select
        let (adjectives, pairs) = {
            trace_stage!(STAGE_SELECT);
            observer.on_stage_start(STAGE_SELECT);
            let clock = StageClock::start();
            let (adjectives, pairs) =
                select_tables(aggregator.adjectives(), aggregator.pairs(), cfg);
            let report =
                StageReport::new(clock.elapsed()).with_items(adjectives.len() + pairs.len());
            observer.on_stage_end(STAGE_SELECT, &report);
            (adjectives, pairs)
        };

        // Stage 3: Assemble
        trace_stage!(STAGE_ASSEMBLE);
        observer.on_stage_start(STAGE_ASSEMBLE);
        let clock = StageClock::start();
        let summary = Summary::assemble(adjectives, pairs);
        observer.on_stage_end(STAGE_ASSEMBLE, &StageReport::new(clock.elapsed()));

        Ok(summary)
    }
}

// ============================================================================
// PipelineBuilder: fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the standard stages and allows overriding each one.
///
/// ```
/// # use review_descriptors::pipeline::runner::PipelineBuilder;
/// # use review_descriptors::pipeline::traits::NoopPreprocessor;
/// let pipeline = PipelineBuilder::new()
///     .preprocessor(NoopPreprocessor)
///     .build();
/// ```
pub struct PipelineBuilder<
    Pre = StopwordPreprocessor,
    AF = StandardAdjectiveFilter,
    PM = AdjacentPairMatcher,
> {
    preprocessor: Pre,
    adjective_filter: AF,
    pair_matcher: PM,
}

impl PipelineBuilder {
    /// Start building from the standard stages.
    pub fn new() -> Self {
        PipelineBuilder {
            preprocessor: StopwordPreprocessor,
            adjective_filter: StandardAdjectiveFilter,
            pair_matcher: AdjacentPairMatcher,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Pre, AF, PM> PipelineBuilder<Pre, AF, PM> {
    /// Override the preprocessor stage.
    pub fn preprocessor<P: Preprocessor>(self, p: P) -> PipelineBuilder<P, AF, PM> {
        PipelineBuilder {
            preprocessor: p,
            adjective_filter: self.adjective_filter,
            pair_matcher: self.pair_matcher,
        }
    }

    /// Override the adjective filter stage.
    pub fn adjective_filter<A: AdjectiveFilter>(self, a: A) -> PipelineBuilder<Pre, A, PM> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            adjective_filter: a,
            pair_matcher: self.pair_matcher,
        }
    }

    /// Override the pair matcher stage.
    pub fn pair_matcher<M: PairMatcher>(self, m: M) -> PipelineBuilder<Pre, AF, M> {
        PipelineBuilder {
            preprocessor: self.preprocessor,
            adjective_filter: self.adjective_filter,
            pair_matcher: m,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<Pre, AF, PM> {
        Pipeline {
            preprocessor: self.preprocessor,
            adjective_filter: self.adjective_filter,
            pair_matcher: self.pair_matcher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DescriptorError;
    use crate::frequency::tables::{AdjectiveCounts, PairTable};
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tagger::LexiconTagger;
    use crate::pipeline::observer::{NoopObserver, StageTimingObserver};
    use crate::pipeline::traits::NoopPreprocessor;
    use crate::summarizer::assembler::DescriptorPair;
    use crate::types::PosTag;

    fn tagger() -> LexiconTagger {
        LexiconTagger::new()
            .with_stopwords(StopwordFilter::from_list(&["the", "is", "a", "very"]))
            .with_word("great", "great", PosTag::Adjective)
            .with_word("awesome", "awesome", PosTag::Adjective)
            .with_word("bad", "bad", PosTag::Adjective)
            .with_word("boring", "boring", PosTag::Adjective)
            .with_word("long", "long", PosTag::Adjective)
            .with_word("game", "game", PosTag::Noun)
            .with_word("games", "game", PosTag::Noun)
            .with_word("graphics", "graphics", PosTag::Noun)
            .with_word("story", "story", PosTag::Noun)
            .with_word("menu", "menu", PosTag::Noun)
            .with_word("is", "be", PosTag::Verb)
            .with_word("the", "the", PosTag::Determiner)
    }

    fn game_config() -> SummaryConfig {
        SummaryConfig::default().with_domain_nouns(["game", "graphics"])
    }

    #[test]
    fn test_end_to_end_example() {
        let reviews = ["great game", "awesome game", "bad graphics"];
        let summary = Pipeline::standard()
            .run(&reviews, &tagger(), &game_config(), &mut NoopObserver)
            .unwrap();

        assert_eq!(summary.top_adjectives, vec!["awesome", "bad", "great"]);
        assert_eq!(
            summary.top_pairs,
            vec![
                DescriptorPair::new("game", "awesome"),
                DescriptorPair::new("graphics", "bad"),
            ]
        );
    }

    #[test]
    fn test_run_is_idempotent() {
        let reviews = [
            "Great game, bad graphics.",
            "The story is long. Boring story!",
            "awesome graphics and great games",
            "bad menu",
        ];
        let cfg = SummaryConfig::default();
        let pipeline = Pipeline::standard();

        let first = pipeline
            .run(&reviews, &tagger(), &cfg, &mut NoopObserver)
            .unwrap();
        let second = pipeline
            .run(&reviews, &tagger(), &cfg, &mut NoopObserver)
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn test_empty_collection() {
        let reviews: [&str; 0] = [];
        let summary = Pipeline::standard()
            .run(&reviews, &tagger(), &SummaryConfig::default(), &mut NoopObserver)
            .unwrap();

        assert!(summary.is_empty());
    }

    #[test]
    fn test_empty_domain_set_gives_no_pairs() {
        let reviews = ["great game"];
        let cfg = SummaryConfig::default().with_domain_nouns(Vec::<String>::new());
        let summary = Pipeline::standard()
            .run(&reviews, &tagger(), &cfg, &mut NoopObserver)
            .unwrap();

        assert_eq!(summary.top_adjectives, vec!["great"]);
        assert!(summary.top_pairs.is_empty());
    }

    #[test]
    fn test_fewer_terms_than_k() {
        let reviews = ["great game great game"];
        let summary = Pipeline::standard()
            .run(&reviews, &tagger(), &game_config(), &mut NoopObserver)
            .unwrap();

        assert_eq!(summary.top_adjectives, vec!["great"]);
        assert_eq!(summary.top_pairs, vec![DescriptorPair::new("game", "great")]);
    }

    #[test]
    fn test_configured_stopwords_only_affect_adjectives() {
        let reviews = ["great game", "bad game"];
        let cfg = game_config().with_stopwords(["great"]);

        let summary = Pipeline::standard()
            .run(&reviews, &tagger(), &cfg, &mut NoopObserver)
            .unwrap();
        assert_eq!(summary.top_adjectives, vec!["bad"]);
        assert_eq!(summary.top_pairs, vec![DescriptorPair::new("game", "bad")]);

        let without = PipelineBuilder::new()
            .preprocessor(NoopPreprocessor)
            .build()
            .run(&reviews, &tagger(), &cfg, &mut NoopObserver)
            .unwrap();
        assert_eq!(without.top_adjectives, vec!["bad", "great"]);
    }

    #[test]
    fn test_builder_defaults_match_standard_pipeline() {
        let reviews = ["great game", "bad game"];
        let cfg = game_config().with_stopwords(["great"]);

        let built = PipelineBuilder::new()
            .build()
            .run(&reviews, &tagger(), &cfg, &mut NoopObserver)
            .unwrap();
        let standard = StandardPipeline::default()
            .run(&reviews, &tagger(), &cfg, &mut NoopObserver)
            .unwrap();

        assert_eq!(built, standard);
        assert_eq!(built.top_adjectives, vec!["bad"]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let reviews = ["great game"];
        let cfg = SummaryConfig::default().with_adjective_top_k(0);

        let result = Pipeline::standard().run(&reviews, &tagger(), &cfg, &mut NoopObserver);
        assert!(matches!(result, Err(DescriptorError::InvalidConfig(_))));
    }

    #[test]
    fn test_tagger_errors_propagate() {
        struct Unavailable;

        impl Tagger for Unavailable {
            fn tag(&self, _text: &str) -> Result<Vec<Token>> {
                Err(DescriptorError::tagger("model not loaded"))
            }
        }

        let result = Pipeline::standard().run(
            &["great game"],
            &Unavailable,
            &SummaryConfig::default(),
            &mut NoopObserver,
        );
        assert!(matches!(result, Err(DescriptorError::Tagger(_))));
    }

    #[test]
    fn test_run_tagged_matches_run() {
        let reviews = ["great game", "awesome game", "bad graphics"];
        let tagger = tagger();
        let documents: Vec<Vec<Token>> = reviews.iter().map(|r| tagger.tag(r).unwrap()).collect();
        let cfg = game_config();

        let tagged = Pipeline::standard()
            .run_tagged(documents, &cfg, &mut NoopObserver)
            .unwrap();
        let raw = Pipeline::standard()
            .run(&reviews, &tagger, &cfg, &mut NoopObserver)
            .unwrap();

        assert_eq!(tagged, raw);
    }

    #[test]
    fn test_observer_sees_stages_and_reviews() {
        #[derive(Default)]
        struct Recorder {
            timing: StageTimingObserver,
            reviews: Vec<ReviewExtraction>,
            distinct_adjectives: usize,
        }

        impl PipelineObserver for Recorder {
            fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
                self.timing.on_stage_end(stage, report);
            }

            fn on_review(&mut self, index: usize, extraction: &ReviewExtraction) {
                assert_eq!(index, self.reviews.len());
                self.reviews.push(extraction.clone());
            }

            fn on_tables(&mut self, adjectives: &AdjectiveCounts, _pairs: &PairTable) {
                self.distinct_adjectives = adjectives.len();
            }
        }

        let mut recorder = Recorder::default();
        Pipeline::standard()
            .run(
                &["great game", "the menu"],
                &tagger(),
                &game_config(),
                &mut recorder,
            )
            .unwrap();

        let stages: Vec<_> = recorder.timing.timings().iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, vec![STAGE_EXTRACT, STAGE_SELECT, STAGE_ASSEMBLE]);
        assert_eq!(recorder.timing.timings()[0].1.items, Some(2));

        assert_eq!(recorder.reviews.len(), 2);
        assert_eq!(recorder.reviews[0].adjectives, vec!["great"]);
        assert!(recorder.reviews[1].is_empty());
        assert_eq!(recorder.distinct_adjectives, 1);
    }

    #[test]
    fn test_extract_review_preprocesses_first() {
        let mut tokens = tagger().tag("boring story").unwrap();
        let cfg = SummaryConfig::default().with_stopwords(["boring"]);
        let ctx = RunContext::new(&cfg).unwrap();

        let extraction = Pipeline::standard().extract_review(&mut tokens, &ctx);

        assert!(tokens[0].is_stopword);
        assert!(extraction.adjectives.is_empty());
        assert_eq!(extraction.pairs.len(), 1);
    }
}
