//! Property tests for document classification

use lexsent_engine::*;
use proptest::prelude::*;

const WORDS: &[(&str, &str)] = &[
    ("good", "JJ"),
    ("bad", "JJ"),
    ("better", "JJR"),
    ("love", "VB"),
    ("hated", "VBD"),
    ("well", "RB"),
    ("mess", "NN"),
    ("not", "RB"),
    ("the", "DT"),
    ("movie", "NN"),
    ("never", "RB"),
    (".", "."),
];

fn lexicon() -> MemoryLexicon {
    MemoryLexicon::builder("prop")
        .adjective("good", 1.0, 0.0)
        .adjective("bad", 0.0, 1.0)
        .adjective("better", 0.625, 0.125)
        .verb("love", 0.75, 0.0)
        .verb("hate", 0.0, 0.75)
        .adverb("well", 0.5, 0.0)
        .noun("mess", 0.0, 0.625)
        .frequency("good", 0.09)
        .frequency("bad", 0.04)
        .build()
        .unwrap()
}

fn document() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(0..WORDS.len(), 0..40),
        prop::bool::ANY,
    )
        .prop_map(|(picks, underscore)| {
            let sep = if underscore { '_' } else { '/' };
            picks
                .into_iter()
                .map(|i| format!("{}{}{}", WORDS[i].0, sep, WORDS[i].1))
                .collect::<Vec<_>>()
                .join(" ")
        })
}

fn config() -> impl Strategy<Value = ClassifierConfig> {
    (
        prop::sample::select(Preset::ALL.to_vec()),
        prop::bool::ANY,
        0usize..8,
        prop::bool::ANY,
    )
        .prop_map(|(preset, adverbs_nouns, window, negation)| {
            let mut config = preset.config();
            config.pos.adverb = adverbs_nouns;
            config.pos.noun = adverbs_nouns;
            config.negation.enabled = negation;
            config.negation.window = window;
            config
        })
}

proptest! {
    #[test]
    fn scores_are_finite_and_non_negative(doc in document(), config in config()) {
        let classifier = DocumentClassifier::builder()
            .config(config)
            .lexicon(lexicon())
            .build()
            .unwrap();
        let result = classifier.classify(&doc).unwrap();

        prop_assert!(result.positive().is_finite() && result.positive() >= 0.0);
        prop_assert!(result.negative().is_finite() && result.negative() >= 0.0);
        prop_assert!(result.tokens_negated <= result.tokens_found);
        prop_assert!(result.tokens_found <= doc.split_whitespace().count());
    }

    #[test]
    fn classification_is_repeatable(doc in document(), config in config()) {
        let classifier = DocumentClassifier::builder()
            .config(config)
            .lexicon(lexicon())
            .build()
            .unwrap();
        let first = classifier.classify(&doc).unwrap();
        let second = classifier.classify(&doc).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn score_once_never_exceeds_score_all(doc in document()) {
        let mut config = ClassifierConfig::default();
        let all = DocumentClassifier::builder()
            .config(config.clone())
            .lexicon(lexicon())
            .build()
            .unwrap()
            .classify(&doc)
            .unwrap();
        config.scan_mode = ScanMode::Once;
        let once = DocumentClassifier::builder()
            .config(config)
            .lexicon(lexicon())
            .build()
            .unwrap()
            .classify(&doc)
            .unwrap();

        prop_assert!(once.positive() <= all.positive() + 1e-12);
        prop_assert!(once.negative() <= all.negative() + 1e-12);
        prop_assert_eq!(once.tokens_found, all.tokens_found);
    }

    #[test]
    fn negation_swaps_but_preserves_total(doc in document()) {
        let plain = ClassifierConfig::builder().negation(false, 0, 0.0).build().unwrap();
        let negated = ClassifierConfig::builder().negation(true, 5, 0.0).build().unwrap();

        let without = DocumentClassifier::builder()
            .config(plain)
            .lexicon(lexicon())
            .build()
            .unwrap()
            .classify(&doc)
            .unwrap();
        let with = DocumentClassifier::builder()
            .config(negated)
            .lexicon(lexicon())
            .build()
            .unwrap()
            .classify(&doc)
            .unwrap();

        let sum = |r: &Classification| r.positive() + r.negative();
        prop_assert!((sum(&without) - sum(&with)).abs() < 1e-9);
    }
}
