use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use word_freq::chart::render_bar_chart;
use word_freq::{count_words, tokenize, WordsOfInterest, WorkerPool};

const PASSAGE: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity -- it was the season of Light, it was the season of Darkness...";

fn expected(entries: &[(&str, u64)]) -> HashMap<String, u64> {
    return entries.iter().map(|(w, c)| (w.to_string(), *c)).collect();
}

// ****************************
// properties over arbitrary text
// ****************************

// letters (ascii and not), punctuation, and whitespace runs
fn text_strategy() -> impl Strategy<Value = String> {
    return prop_oneof![
        "[a-zA-Zéüß.,;:!?'\"()\\- \t\n]{0,300}",
        prop::collection::vec(
            (prop::sample::select(vec!["The", "the", "cat", "Dog", "café", "--", "...", "a,", "ÜBER"]),
             prop::sample::select(vec![" ", "  ", "\t", "\n", " -- "])),
            0..80,
        )
        .prop_map(|parts| parts.into_iter().map(|(w, sep)| format!("{}{}", w, sep)).collect::<String>()),
    ];
}

fn filter_strategy() -> impl Strategy<Value = Vec<String>> {
    return prop::collection::vec("[a-zA-Zé.\\-]{0,4}", 0..5);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn counts_sum_to_token_count(text in text_strategy(), words in filter_strategy()) {
        let pool = WorkerPool::with_workers(4).unwrap();

        let freqs = count_words(&pool, &text, None);
        prop_assert_eq!(freqs.total(), tokenize(&text, None).len() as u64);

        let filter = WordsOfInterest::new(&words);
        let filtered = count_words(&pool, &text, Some(&filter));
        prop_assert_eq!(filtered.total(), tokenize(&text, Some(&filter)).len() as u64);
        if filter.is_active() {
            for (word, _) in filtered.iter() {
                prop_assert!(filter.contains(word));
            }
        } else {
            prop_assert_eq!(&filtered, &freqs);
        }
    }

    #[test]
    fn every_distinct_word_is_one_key(text in text_strategy()) {
        let pool = WorkerPool::with_workers(3).unwrap();
        let freqs = count_words(&pool, &text, None);

        let distinct: HashSet<String> = tokenize(&text, None).into_iter().collect();
        prop_assert_eq!(freqs.len(), distinct.len());
        for word in distinct.iter() {
            prop_assert!(freqs.get(word).unwrap_or(0) > 0);
        }
        for (word, _) in freqs.iter() {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.chars().any(|c| c.is_ascii_punctuation() || c.is_whitespace()));
        }
    }

    #[test]
    fn repeated_runs_agree_across_pool_sizes(text in text_strategy(), words in filter_strategy()) {
        let filter = WordsOfInterest::new(&words);
        let single = WorkerPool::with_workers(1).unwrap();
        let many = WorkerPool::with_workers(8).unwrap();

        let first = count_words(&single, &text, Some(&filter));
        let second = count_words(&many, &text, Some(&filter));
        let third = count_words(&many, &text, Some(&filter));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&second, &third);
    }
}

#[test]
fn filter_of_vanishing_words_counts_nothing() {
    let pool = WorkerPool::with_workers(2).unwrap();
    let filter = WordsOfInterest::new(vec!["--"]);
    assert!(count_words(&pool, "a a b -- c", Some(&filter)).is_empty());
}

#[test]
fn long_text_counts_match_across_pool_sizes() {
    let text = PASSAGE.repeat(200);
    let first = count_words(&WorkerPool::with_workers(1).unwrap(), &text, None);
    let second = count_words(&WorkerPool::with_workers(8).unwrap(), &text, None);
    assert_eq!(first, second);
    assert_eq!(first.get("of"), Some(1600));
}
#[test]
fn reference_examples() {
    let pool = WorkerPool::new().unwrap();

    let sentence = count_words(&pool, "The cat. The dog! THE bird.", None);
    assert_eq!(sentence.into_inner(), expected(&[("the", 3), ("cat", 1), ("dog", 1), ("bird", 1)]));

    let letters = count_words(&pool, "a a a b b c", None);
    assert_eq!(letters.top_n(1), vec![("a", 3)]);
    assert_eq!(letters.into_inner(), expected(&[("a", 3), ("b", 2), ("c", 1)]));

    let filter = WordsOfInterest::new(vec!["a", "c"]);
    let filtered = count_words(&pool, "a a a b b c", Some(&filter));
    assert_eq!(filtered.into_inner(), expected(&[("a", 3), ("c", 1)]));

    assert!(count_words(&pool, "", None).is_empty());
    assert!(count_words(&pool, " -- ", None).is_empty());
}

#[test]
fn chart_of_a_real_passage() {
    let pool = WorkerPool::with_workers(2).unwrap();
    let freqs = count_words(&pool, PASSAGE, None);
    let chart = render_bar_chart(&freqs, 3, 40);
    let rows: Vec<&str> = chart.lines().skip(1).take(3).collect();

    // "it", "of", "the" and "was" all appear 8 times; ties go alphabetically
    assert!(rows[0].starts_with("it "));
    assert!(rows[1].starts_with("of "));
    assert!(rows[2].starts_with("the"));
    assert!(rows.iter().all(|r| r.ends_with(" 8")));
}
