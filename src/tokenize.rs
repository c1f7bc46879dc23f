//! Text normalization shared by documents, sentences, and queries.
//!
//! Words come from Unicode segmentation (UAX #29), are lowercased, and
//! pass through a fixed English stopword filter. Pure punctuation never
//! survives segmentation, so no separate punctuation filter is needed.

use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use unicode_segmentation::UnicodeSegmentation;

/// Occurrence counts for the normalized terms of one document or sentence.
///
/// Every stored count is >= 1; absent terms are simply missing keys.
pub type TermCounts = HashMap<String, u64>;

// NLTK-style English stopword list. Read-only after initialization and
// safe to share across parallel tokenization.
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let words: &[&str] = &[
        "a", "about", "above", "after", "again", "against", "all", "am",
        "an", "and", "any", "are", "aren't", "as", "at", "be", "because",
        "been", "before", "being", "below", "between", "both", "but", "by",
        "can", "can't", "cannot", "could", "couldn't", "did", "didn't",
        "do", "does", "doesn't", "doing", "don't", "down", "during",
        "each", "few", "for", "from", "further", "had", "hadn't", "has",
        "hasn't", "have", "haven't", "having", "he", "he'd", "he'll",
        "he's", "her", "here", "here's", "hers", "herself", "him",
        "himself", "his", "how", "how's", "i", "i'd", "i'll", "i'm",
        "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its",
        "itself", "let's", "me", "more", "most", "mustn't", "my",
        "myself", "no", "nor", "not", "of", "off", "on", "once", "only",
        "or", "other", "ought", "our", "ours", "ourselves", "out", "over",
        "own", "same", "she", "she'd", "she'll", "she's", "should",
        "shouldn't", "so", "some", "such", "than", "that", "that's",
        "the", "their", "theirs", "them", "themselves", "then", "there",
        "there's", "these", "they", "they'd", "they'll", "they're",
        "they've", "this", "those", "through", "to", "too", "under",
        "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll",
        "we're", "we've", "were", "weren't", "what", "what's", "when",
        "when's", "where", "where's", "which", "while", "who", "who's",
        "whom", "why", "why's", "with", "won't", "would", "wouldn't",
        "you", "you'd", "you'll", "you're", "you've", "your", "yours",
        "yourself", "yourselves",
    ];
    words.iter().copied().collect()
});

/// Tokenize `text` into a term multiset.
///
/// Empty or all-stopword input degrades to an empty multiset; there are
/// no error conditions. Pure function of the input and the fixed
/// stopword set.
pub fn term_counts(text: &str) -> TermCounts {
    let mut counts = TermCounts::new();
    for word in text.unicode_words() {
        let term = word.to_lowercase();
        if STOPWORDS.contains(term.as_str()) {
            continue;
        }
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// Tokenize a query line into its set of distinct terms.
///
/// Uses the same normalization as [`term_counts`] so query terms compare
/// equal to document terms.
pub fn query_terms(text: &str) -> HashSet<String> {
    term_counts(text).into_keys().collect()
}

/// Total term occurrences in a multiset (the density denominator).
pub fn total_terms(counts: &TermCounts) -> u64 {
    counts.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_counts() {
        let counts = term_counts("Cat cat CAT dog");
        assert_eq!(counts["cat"], 3);
        assert_eq!(counts["dog"], 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn drops_stopwords() {
        let counts = term_counts("The cat sat on the mat.");
        assert!(counts.contains_key("cat"));
        assert!(counts.contains_key("sat"));
        assert!(counts.contains_key("mat"));
        assert!(!counts.contains_key("the"));
        assert!(!counts.contains_key("on"));
    }

    #[test]
    fn drops_punctuation() {
        let counts = term_counts("cats, dogs; birds!!! ...");
        assert_eq!(counts.len(), 3);
        assert!(counts.contains_key("cats"));
        assert!(!counts.keys().any(|t| t.contains(',') || t.contains('!')));
    }

    #[test]
    fn empty_input_empty_multiset() {
        assert!(term_counts("").is_empty());
        assert!(term_counts("   \n\t").is_empty());
        assert!(term_counts("... !!! ???").is_empty());
    }

    #[test]
    fn all_stopwords_empty_multiset() {
        assert!(term_counts("the of and or but").is_empty());
    }

    #[test]
    fn stopword_contractions_filtered() {
        let counts = term_counts("It's a test, isn't it?");
        assert_eq!(counts.len(), 1);
        assert!(counts.contains_key("test"));
    }

    #[test]
    fn handles_unicode_words() {
        let counts = term_counts("Café résumé café");
        assert_eq!(counts["café"], 2);
        assert_eq!(counts["résumé"], 1);
    }

    #[test]
    fn query_terms_collapse_duplicates() {
        let query = query_terms("cat cat dog the");
        assert_eq!(query.len(), 2);
        assert!(query.contains("cat"));
        assert!(query.contains("dog"));
    }

    #[test]
    fn total_terms_sums_counts() {
        let counts = term_counts("cat cat dog");
        assert_eq!(total_terms(&counts), 3);
        assert_eq!(total_terms(&TermCounts::new()), 0);
    }
}
