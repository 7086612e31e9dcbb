//! Tests for lorem

use super::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn generator(seed: u64) -> LoremGenerator<StdRng> {
    LoremGenerator::new(StdRng::seed_from_u64(seed))
}

fn config(unit: LoremUnit, count: usize, start_with_lorem: bool) -> LoremConfig {
    LoremConfig::new(unit, count, start_with_lorem).unwrap()
}

#[test]
fn test_dictionary_size() {
    assert_eq!(LOREM_WORDS.len(), 84);
}

#[test]
fn test_preamble_word_list() {
    assert_eq!(
        preamble_word_list(),
        vec!["lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit"]
    );
}

#[test]
fn test_five_words_from_preamble() {
    let text = generator(1).generate(&config(LoremUnit::Words, 5, true));
    assert_eq!(text, "lorem ipsum dolor sit amet");
}

#[test]
fn test_words_beyond_preamble_are_padded() {
    let text = generator(2).generate(&config(LoremUnit::Words, 12, true));
    let words: Vec<&str> = text.split(' ').collect();

    assert_eq!(words.len(), 12);
    assert_eq!(&words[..8], preamble_word_list().as_slice());
    assert!(words[8..].iter().all(|w| LOREM_WORDS.contains(w)));
}

#[test]
fn test_words_without_preamble_come_from_dictionary() {
    let text = generator(3).generate(&config(LoremUnit::Words, 40, false));
    let words: Vec<&str> = text.split(' ').collect();

    assert_eq!(words.len(), 40);
    assert!(words.iter().all(|w| LOREM_WORDS.contains(w)));
}

#[test]
fn test_single_word() {
    let text = generator(4).generate(&config(LoremUnit::Words, 1, true));
    assert_eq!(text, "lorem");
}

#[test]
fn test_sentence_shape() {
    let mut lorem = generator(5);
    for _ in 0..50 {
        let sentence = lorem.sentence();
        assert!(sentence.ends_with('.'));
        assert!(sentence.chars().next().unwrap().is_uppercase());

        let words = sentence.split(' ').count();
        assert!(SENTENCE_WORDS.contains(&words), "{} words", words);
    }
}

#[test]
fn test_paragraph_sentence_count() {
    let mut lorem = generator(6);
    for _ in 0..20 {
        let paragraph = lorem.paragraph();
        let sentences = paragraph.matches('.').count();
        assert!(PARAGRAPH_SENTENCES.contains(&sentences), "{} sentences", sentences);
        assert!(!paragraph.contains('\n'));
    }
}

#[test]
fn test_sentences_start_with_preamble() {
    let text = generator(7).generate(&config(LoremUnit::Sentences, 3, true));
    assert!(text.starts_with(PREAMBLE));
}

#[test]
fn test_sentences_without_preamble() {
    let text = generator(8).generate(&config(LoremUnit::Sentences, 3, false));
    assert!(!text.starts_with(PREAMBLE));
    assert_eq!(text.matches('.').count(), 3);
}

#[test]
fn test_paragraphs_joined_by_blank_lines() {
    let text = generator(9).generate(&config(LoremUnit::Paragraphs, 3, false));
    assert_eq!(text.split("\n\n").count(), 3);
    assert!(!text.contains("\n\n\n"));
}

#[test]
fn test_paragraphs_start_with_preamble() {
    let text = generator(10).generate(&config(LoremUnit::Paragraphs, 2, true));
    assert!(text.starts_with(PREAMBLE));
    assert_eq!(text.split("\n\n").count(), 2);
}

#[test]
fn test_same_seed_same_text() {
    let cfg = config(LoremUnit::Paragraphs, 4, false);
    assert_eq!(generator(11).generate(&cfg), generator(11).generate(&cfg));
}

#[test]
fn test_config_rejects_zero() {
    assert_eq!(
        LoremConfig::new(LoremUnit::Words, 0, true),
        Err(LoremError::CountOutOfRange {
            unit: LoremUnit::Words,
            count: 0,
            max: 500
        })
    );
}

#[test]
fn test_config_limits_per_unit() {
    assert!(LoremConfig::new(LoremUnit::Words, 500, true).is_ok());
    assert!(LoremConfig::new(LoremUnit::Words, 501, true).is_err());
    assert!(LoremConfig::new(LoremUnit::Sentences, 50, true).is_ok());
    assert!(LoremConfig::new(LoremUnit::Sentences, 51, true).is_err());
    assert!(LoremConfig::new(LoremUnit::Paragraphs, 20, true).is_ok());
    assert!(LoremConfig::new(LoremUnit::Paragraphs, 21, true).is_err());
}

#[test]
fn test_error_message() {
    let err = LoremConfig::new(LoremUnit::Paragraphs, 21, false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Count must be between 1 and 20 for paragraphs, got 21"
    );
}

#[test]
fn test_unit_parsing() {
    assert_eq!("Words".parse::<LoremUnit>(), Ok(LoremUnit::Words));
    assert_eq!("sentence".parse::<LoremUnit>(), Ok(LoremUnit::Sentences));
    assert_eq!("paragraphs".parse::<LoremUnit>(), Ok(LoremUnit::Paragraphs));
    assert!("lines".parse::<LoremUnit>().is_err());
    assert_eq!(LoremUnit::default(), LoremUnit::Paragraphs);
}

fn arb_unit() -> impl Strategy<Value = LoremUnit> {
    prop_oneof![
        Just(LoremUnit::Words),
        Just(LoremUnit::Sentences),
        Just(LoremUnit::Paragraphs)
    ]
}

// Feature: lorem-generator, Property: word count is exact
// *For any* count in range and either preamble setting, generating words SHALL
// yield exactly `count` space-separated tokens, the leading ones taken from the
// preamble when it is requested.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_word_count_is_exact(count in 1usize..=500, start in any::<bool>(), seed in any::<u64>()) {
        let text = generator(seed).generate(&config(LoremUnit::Words, count, start));
        let words: Vec<&str> = text.split(' ').collect();
        prop_assert_eq!(words.len(), count);

        if start {
            let preamble = preamble_word_list();
            let shared = count.min(preamble.len());
            prop_assert_eq!(&words[..shared], &preamble[..shared]);
        }
    }

    #[test]
    fn prop_output_is_never_empty(unit in arb_unit(), count in 1usize..=20, start in any::<bool>(), seed in any::<u64>()) {
        let text = generator(seed).generate(&config(unit, count, start));
        prop_assert!(!text.trim().is_empty());
        prop_assert_eq!(text.trim(), text.as_str());
    }

    #[test]
    fn prop_paragraph_count_is_exact(count in 1usize..=20, seed in any::<u64>()) {
        let text = generator(seed).generate(&config(LoremUnit::Paragraphs, count, true));
        prop_assert_eq!(text.split("\n\n").count(), count);
    }
}
