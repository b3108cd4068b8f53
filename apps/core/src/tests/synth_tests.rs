//! Synthesizer Tests
//!
//! Every domain and tier combination must produce an artifact that passes the
//! structural checks, and the delay must come from the configured window.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;

use crate::brain::{AnalysisRecord, Complexity, ContentClassifier, Domain, Topic};
use crate::synth::{
    bank_for, DelayWindow, ExplanationSynthesizer, ADVANCED_ADVISORY, MAX_LIST_LEN, MIN_LIST_LEN,
};
use crate::tests::support::{RecordingPacer, ASYNC_CLIENT};

const DOMAINS: [Domain; 5] = [
    Domain::UiFramework,
    Domain::Scripting,
    Domain::NetworkApi,
    Domain::Styling,
    Domain::Generic,
];

const TIERS: [Complexity; 3] = [Complexity::Beginner, Complexity::Intermediate, Complexity::Advanced];

fn synthesizer() -> (ExplanationSynthesizer, Arc<RecordingPacer>) {
    let pacer = Arc::new(RecordingPacer::default());
    let window = DelayWindow::new(Duration::from_millis(100), Duration::from_millis(200)).unwrap();
    (ExplanationSynthesizer::new(window, pacer.clone()), pacer)
}

#[cfg(test)]
mod composition_tests {
    use super::*;

    #[test]
    fn test_every_domain_and_tier_is_well_formed() {
        let (synth, _) = synthesizer();
        let mut rng = StdRng::seed_from_u64(1);

        for domain in DOMAINS {
            for complexity in TIERS {
                for topics in [vec![], Topic::ALL.to_vec()] {
                    let record = AnalysisRecord {
                        domain,
                        complexity,
                        topics,
                        key_terms: vec!["state".into(), "props".into()],
                        code_fragments: vec![],
                    };

                    let artifact = synth.compose("", &record, &mut rng);
                    assert!(
                        artifact.check_invariants().is_ok(),
                        "Invalid artifact for {:?}/{:?}",
                        domain,
                        complexity
                    );
                    assert!((MIN_LIST_LEN..=MAX_LIST_LEN).contains(&artifact.use_cases.len()));
                    assert!((MIN_LIST_LEN..=MAX_LIST_LEN).contains(&artifact.key_points.len()));
                }
            }
        }
    }

    #[test]
    fn test_analogy_always_from_domain_bank() {
        let (synth, _) = synthesizer();

        for domain in DOMAINS {
            let record = AnalysisRecord {
                domain,
                ..AnalysisRecord::default()
            };
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let artifact = synth.compose("", &record, &mut rng);
                assert!(bank_for(domain).analogies.contains(&artifact.analogy.as_str()));
            }
        }
    }

    #[test]
    fn test_same_seed_same_artifact() {
        let (synth, _) = synthesizer();
        let record = ContentClassifier::new().analyze(ASYNC_CLIENT);

        let a = synth.compose(ASYNC_CLIENT, &record, &mut StdRng::seed_from_u64(9));
        let b = synth.compose(ASYNC_CLIENT, &record, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_only_analogy_depends_on_seed() {
        let (synth, _) = synthesizer();
        let record = ContentClassifier::new().analyze(ASYNC_CLIENT);
        let baseline = synth.compose(ASYNC_CLIENT, &record, &mut StdRng::seed_from_u64(0));

        for seed in 1..20 {
            let other = synth.compose(ASYNC_CLIENT, &record, &mut StdRng::seed_from_u64(seed));
            assert_eq!(other.summary, baseline.summary);
            assert_eq!(other.code_example, baseline.code_example);
            assert_eq!(other.use_cases, baseline.use_cases);
            assert_eq!(other.key_points, baseline.key_points);
        }
    }

    #[test]
    fn test_single_line_fence_used_verbatim() {
        let (synth, _) = synthesizer();
        let text = "Call the hook like this: ```useState(0)``` to create a counter in a component.";
        let record = ContentClassifier::new().analyze(text);

        assert_eq!(record.code_fragments, vec!["```useState(0)```".to_string()]);
        let artifact = synth.compose(text, &record, &mut StdRng::seed_from_u64(4));
        assert_eq!(artifact.code_example, "useState(0)");
    }

    #[test]
    fn test_advanced_record_leads_with_advisory() {
        let (synth, _) = synthesizer();
        let record = AnalysisRecord {
            complexity: Complexity::Advanced,
            ..AnalysisRecord::default()
        };

        let artifact = synth.compose("", &record, &mut StdRng::seed_from_u64(3));
        assert_eq!(artifact.key_points[0], ADVANCED_ADVISORY);
        assert_eq!(artifact.key_points.len(), 4);
    }

    #[test]
    fn test_code_example_uses_first_fragment() {
        let (synth, _) = synthesizer();
        let record = ContentClassifier::new().analyze(ASYNC_CLIENT);

        let artifact = synth.compose(ASYNC_CLIENT, &record, &mut StdRng::seed_from_u64(3));
        assert_eq!(artifact.code_example, "fetch('/api/users')");
    }
}

#[cfg(test)]
mod pacing_tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_pauses_once_within_window() {
        let (synth, pacer) = synthesizer();
        let window = synth.delay_window();
        let record = AnalysisRecord::default();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            synth.generate("", &record, &mut rng).await;
        }

        let pauses = pacer.pauses();
        assert_eq!(pauses.len(), 10);
        for pause in pauses {
            assert!(window.contains(pause), "{:?} outside {:?}", pause, window);
        }
    }

    #[tokio::test]
    async fn test_generate_matches_compose() {
        let (synth, _) = synthesizer();
        let record = ContentClassifier::new().analyze(ASYNC_CLIENT);

        // generate draws the delay first, then the analogy
        let mut rng = StdRng::seed_from_u64(11);
        let generated = synth.generate(ASYNC_CLIENT, &record, &mut rng).await;

        let mut rng = StdRng::seed_from_u64(11);
        let _ = synth.delay_window().sample(&mut rng);
        let composed = synth.compose(ASYNC_CLIENT, &record, &mut rng);

        assert_eq!(generated, composed);
    }
}
