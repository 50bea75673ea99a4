//! Stopword filtering

use std::collections::HashSet;

/// Membership test for words excluded from scoring when the stopword gate
/// is enabled
pub trait StopwordFilter: Send + Sync {
    /// Whether `word` (lower-cased) is a stopword
    fn is_stop(&self, word: &str) -> bool;
}

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
    "why", "will", "with", "would", "you", "your", "yours", "yourself", "yourselves",
];

/// A fixed set of stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordList {
    words: HashSet<String>,
}

impl StopwordList {
    /// Built-in English list
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// An empty list
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a list from words; entries are lower-cased
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parse one word per line, skipping blanks and `#` comments
    pub fn parse(source: &str) -> Self {
        Self::from_words(
            source
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Add more words
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Number of stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl StopwordFilter for StopwordList {
    fn is_stop(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list() {
        let list = StopwordList::english();
        assert!(list.is_stop("the"));
        assert!(list.is_stop("very"));
        assert!(!list.is_stop("good"));
        assert!(!list.is_empty());
    }

    #[test]
    fn test_parse() {
        let list = StopwordList::parse("# objective words\nGood\n\n  fine \n");
        assert_eq!(list.len(), 2);
        assert!(list.is_stop("good"));
        assert!(list.is_stop("fine"));
    }

    #[test]
    fn test_extend() {
        let mut list = StopwordList::empty();
        assert!(!list.is_stop("movie"));
        list.extend(["Movie"]);
        assert!(list.is_stop("movie"));
    }
}
