use std::collections::HashSet;


/// Words a caller wants counted. Normalized the same way tokens are, so `"The"` matches `"the"`.
///
/// Built from no words at all it filters nothing. Built from words that normalize away
/// (`"--"`, `""`) it still filters, and matches no token.
#[derive(Debug, Clone, Default)]
pub struct WordsOfInterest {
    words: HashSet<String>,
    requested: bool,
}

impl WordsOfInterest {

    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut requested = false;
        let words = words
            .into_iter()
            .inspect(|_| requested = true)
            .flat_map(|w| tokenize(w.as_ref(), None))
            .collect();
        return WordsOfInterest { words, requested };
    }

    // false only when the caller gave no words
    pub fn is_active(&self) -> bool {
        return self.requested;
    }

    pub fn contains(&self, token: &str) -> bool {
        return self.words.contains(token);
    }

    pub fn is_empty(&self) -> bool {
        return self.words.is_empty();
    }

    pub fn len(&self) -> usize {
        return self.words.len();
    }
}

pub fn strip_punctuation(text: &str) -> String {
    return text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
}

// punctuation goes first, so "--" disappears instead of becoming an empty token.
// a filter built from no words counts as no filter.
pub fn tokenize(text: &str, words_of_interest: Option<&WordsOfInterest>) -> Vec<String> {
    let stripped = strip_punctuation(text);
    let tokens = stripped.split_whitespace().map(|w| w.to_lowercase());

    match words_of_interest {
        Some(filter) if filter.is_active() => tokens.filter(|t| filter.contains(t)).collect(),
        _ => tokens.collect(),
    }
}
