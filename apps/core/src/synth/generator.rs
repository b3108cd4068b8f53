//! Explanation Synthesizer.
//!
//! Turns an [`AnalysisRecord`] into an [`ExplanationArtifact`] by filling the
//! template bank of the record's domain. The only random choices are the
//! analogy and the simulated delay, both drawn from a caller-supplied RNG.

use rand::Rng;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::artifact::ExplanationArtifact;
use super::pacer::{DelayWindow, Pacer, TokioPacer};
use super::templates::{bank_for, TemplateBank, NO_TERMS_PHRASE};
use crate::brain::{strip_delimiters, AnalysisRecord, Complexity};

/// Advisory prepended to key points for advanced material
pub const ADVANCED_ADVISORY: &str =
    "This is an advanced topic - make sure you understand the fundamentals first";

/// At most this many topic-derived use cases, keeping the list within six entries
const MAX_TOPIC_USE_CASES: usize = 3;
/// Domain use cases appended after topic-derived ones
const TOPIC_TAIL_USE_CASES: usize = 3;
/// Domain use cases returned when no topic was found
const PLAIN_USE_CASES: usize = 4;
/// Target length of the key point list
const KEY_POINT_COUNT: usize = 4;

pub struct ExplanationSynthesizer {
    delay: DelayWindow,
    pacer: Arc<dyn Pacer>,
}

impl Default for ExplanationSynthesizer {
    fn default() -> Self {
        Self::new(DelayWindow::default(), Arc::new(TokioPacer))
    }
}

impl ExplanationSynthesizer {
    pub fn new(delay: DelayWindow, pacer: Arc<dyn Pacer>) -> Self {
        Self { delay, pacer }
    }

    pub fn delay_window(&self) -> DelayWindow {
        self.delay
    }

    /// Wait a random delay from the window, then compose the artifact.
    #[instrument(skip_all, fields(domain = %record.domain, complexity = %record.complexity))]
    pub async fn generate<R>(
        &self,
        text: &str,
        record: &AnalysisRecord,
        rng: &mut R,
    ) -> ExplanationArtifact
    where
        R: Rng + Send,
    {
        self.pace(rng).await;
        self.compose(text, record, rng)
    }

    /// Wait one random delay from the window.
    pub async fn pace<R>(&self, rng: &mut R)
    where
        R: Rng + Send,
    {
        let delay = self.delay.sample(rng);
        debug!(delay_ms = delay.as_millis() as u64, "Simulating processing delay");
        self.pacer.pause(delay).await;
    }

    /// Build the artifact without any delay.
    pub fn compose<R>(&self, text: &str, record: &AnalysisRecord, rng: &mut R) -> ExplanationArtifact
    where
        R: Rng + ?Sized,
    {
        let bank = bank_for(record.domain);
        debug!(chars = text.chars().count(), "Composing explanation");

        ExplanationArtifact {
            summary: summary(bank, record),
            analogy: analogy(bank, rng).to_string(),
            code_example: code_example(bank, record),
            use_cases: use_cases(bank, record),
            key_points: key_points(bank, record),
        }
    }
}

fn summary(bank: &TemplateBank, record: &AnalysisRecord) -> String {
    let terms = if record.key_terms.is_empty() {
        NO_TERMS_PHRASE.to_string()
    } else {
        record.leading_terms().join(", ")
    };

    let closing = if record.topics.is_empty() {
        bank.summary_without_topics.to_string()
    } else {
        let topics: Vec<&str> = record.topics.iter().map(|t| t.label()).collect();
        bank.summary_with_topics.replace("{topics}", &topics.join(", "))
    };

    bank.summary
        .iter()
        .map(|sentence| {
            sentence
                .replace("{complexity}", record.complexity.label())
                .replace("{terms}", &terms)
        })
        .chain(std::iter::once(closing))
        .collect::<Vec<_>>()
        .join(" ")
}

fn analogy<R: Rng + ?Sized>(bank: &TemplateBank, rng: &mut R) -> &'static str {
    bank.analogies[rng.gen_range(0..bank.analogies.len())]
}

fn code_example(bank: &TemplateBank, record: &AnalysisRecord) -> String {
    record
        .code_fragments
        .first()
        .map(|fragment| strip_delimiters(fragment))
        .filter(|code| !code.is_empty())
        .unwrap_or_else(|| bank.code_example.to_string())
}

fn use_cases(bank: &TemplateBank, record: &AnalysisRecord) -> Vec<String> {
    if record.topics.is_empty() {
        return bank.use_cases[..PLAIN_USE_CASES]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    record
        .topics
        .iter()
        .take(MAX_TOPIC_USE_CASES)
        .map(|topic| {
            format!(
                "When working with {} in your applications",
                topic.label().to_lowercase()
            )
        })
        .chain(
            bank.use_cases[..TOPIC_TAIL_USE_CASES]
                .iter()
                .map(|s| s.to_string()),
        )
        .collect()
}

fn key_points(bank: &TemplateBank, record: &AnalysisRecord) -> Vec<String> {
    let mut points = Vec::with_capacity(KEY_POINT_COUNT);

    if record.complexity == Complexity::Advanced {
        points.push(ADVANCED_ADVISORY.to_string());
    }
    if !record.key_terms.is_empty() {
        points.push(format!(
            "Key terminology to remember: {}",
            record.leading_terms().join(", ")
        ));
    }

    let remaining = KEY_POINT_COUNT.saturating_sub(points.len());
    points.extend(bank.key_points.iter().take(remaining).map(|s| s.to_string()));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::{Domain, Topic};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(domain: Domain) -> AnalysisRecord {
        AnalysisRecord {
            domain,
            ..AnalysisRecord::default()
        }
    }

    #[test]
    fn test_summary_fills_slots() {
        let record = AnalysisRecord {
            domain: Domain::NetworkApi,
            complexity: Complexity::Intermediate,
            topics: vec![Topic::DataFetching],
            key_terms: vec!["api".into(), "request".into(), "response".into(), "json".into()],
            code_fragments: vec![],
        };

        let text = summary(bank_for(Domain::NetworkApi), &record);
        assert!(text.contains("intermediate-level concepts including api, request, response."));
        assert!(text.ends_with("Key areas covered: Data Fetching."));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_summary_without_topics_or_terms() {
        let text = summary(bank_for(Domain::Generic), &record(Domain::Generic));

        assert!(text.contains(NO_TERMS_PHRASE));
        assert!(text.ends_with("This provides essential technical knowledge."));
    }

    #[test]
    fn test_code_example_prefers_first_fragment() {
        let record = AnalysisRecord {
            code_fragments: vec!["```js\nlet a = 1;\n```".into(), "`b`".into()],
            ..record(Domain::Scripting)
        };

        assert_eq!(code_example(bank_for(Domain::Scripting), &record), "let a = 1;");
    }

    #[test]
    fn test_code_example_falls_back_on_empty_fence() {
        let record = AnalysisRecord {
            code_fragments: vec!["```\n```".into()],
            ..record(Domain::Styling)
        };

        assert_eq!(
            code_example(bank_for(Domain::Styling), &record),
            bank_for(Domain::Styling).code_example
        );
    }

    #[test]
    fn test_use_cases_with_many_topics_capped() {
        let record = AnalysisRecord {
            topics: Topic::ALL.to_vec(),
            ..record(Domain::UiFramework)
        };

        let cases = use_cases(bank_for(Domain::UiFramework), &record);
        assert_eq!(cases.len(), 6);
        assert_eq!(cases[0], "When working with state management in your applications");
        assert_eq!(cases[3], "Building interactive user interfaces with dynamic data");
    }

    #[test]
    fn test_key_points_prefix_never_truncated() {
        let record = AnalysisRecord {
            complexity: Complexity::Advanced,
            key_terms: vec!["async".into(), "await".into(), "promise".into(), "callback".into()],
            ..record(Domain::Scripting)
        };

        let points = key_points(bank_for(Domain::Scripting), &record);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], ADVANCED_ADVISORY);
        assert_eq!(points[1], "Key terminology to remember: async, await, promise");
        assert_eq!(points[2], bank_for(Domain::Scripting).key_points[0]);
    }

    #[test]
    fn test_analogy_is_a_bank_candidate() {
        let synthesizer = ExplanationSynthesizer::default();
        let mut rng = StdRng::seed_from_u64(42);
        let bank = bank_for(Domain::Styling);

        for _ in 0..20 {
            let artifact = synthesizer.compose("text", &record(Domain::Styling), &mut rng);
            assert!(bank.analogies.contains(&artifact.analogy.as_str()));
        }
    }
}
