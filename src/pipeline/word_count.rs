use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use crate::pipeline::Keyable;
use crate::compute::WorkerPool;
use crate::pipeline::tokenizer::{tokenize, WordsOfInterest};
use crate::pipeline::PipelineStage;


pub struct WordCount {
    word: String,
    count: u64,
}

impl Keyable<String, u64> for WordCount {
    fn get_key(&self) -> String {
        return self.word.clone();
    }

    fn get_value(&self) -> &u64 {
        return &self.count;
    }
}

pub fn word_count_mapper(token: String) -> WordCount {
    return WordCount { word: token, count: 1 };
}

pub fn word_count_reducer(key: String, vs: Vec<u64>) -> (String, u64) {
    let sum: u64 = vs.iter().sum();
    return (key, sum);
}


/// Final word -> count mapping of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequencies {
    counts: HashMap<String, u64>,
}

impl WordFrequencies {

    pub fn get(&self, word: &str) -> Option<u64> {
        return self.counts.get(word).copied();
    }

    pub fn len(&self) -> usize {
        return self.counts.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.counts.is_empty();
    }

    /// Sum of all counts, i.e. the number of tokens that were counted.
    pub fn total(&self) -> u64 {
        return self.counts.values().sum();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        return self.counts.iter().map(|(w, c)| (w.as_str(), *c));
    }

    /// The `n` most frequent words, highest count first.
    ///
    /// Words with the same count are ordered alphabetically, so the selection does not
    /// depend on hash map iteration order.
    pub fn top_n(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        return entries;
    }

    pub fn into_inner(self) -> HashMap<String, u64> {
        return self.counts;
    }
}

impl From<Vec<(String, u64)>> for WordFrequencies {
    fn from(entries: Vec<(String, u64)>) -> Self {
        return WordFrequencies { counts: entries.into_iter().collect() };
    }
}


pub fn word_count_stage() -> PipelineStage<String, WordCount, String, u64> {
    return PipelineStage::new(word_count_mapper, word_count_reducer);
}

// tokenize -> map -> shuffle -> reduce -> assemble.
// empty text is valid and gives an empty mapping.
pub fn count_words(pool: &WorkerPool, text: &str, words_of_interest: Option<&WordsOfInterest>) -> WordFrequencies {
    let tokens = tokenize(text, words_of_interest);
    log::debug!("tokenized {} bytes into {} tokens", text.len(), tokens.len());

    let reduced = word_count_stage().run(pool, tokens);
    let frequencies = WordFrequencies::from(reduced);
    log::info!("counted {} words, {} distinct", frequencies.total(), frequencies.len());
    return frequencies;
}
