//! Query pipeline: corpus → term multisets → file IDF → file ranking →
//! sentence extraction → sentence IDF → sentence ranking.
//!
//! The file-level structures are built once and held read-only; the
//! sentence-level structures are derived fresh for every query from the
//! shortlisted files only, so the two IDF tables are never conflated.

use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    idf::{self, IdfTable},
    rank::{self, RankedFile, ScoredSentence, Sentence},
    sentence,
    tokenize::{self, TermCounts},
};

/// Number of top-ranked files to shortlist before sentence extraction.
pub const DEFAULT_FILE_MATCHES: usize = 1;

/// Number of top-ranked sentences to return per query.
pub const DEFAULT_SENTENCE_MATCHES: usize = 1;

/// Shortlist sizes for the two ranking stages.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub file_matches: usize,
    pub sentence_matches: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            file_matches: DEFAULT_FILE_MATCHES,
            sentence_matches: DEFAULT_SENTENCE_MATCHES,
        }
    }
}

/// The tokenized corpus and its file-level IDF table.
///
/// Immutable once built; every query reads it and builds its own
/// sentence-level structures.
pub struct CorpusIndex {
    documents: BTreeMap<String, String>,
    terms: BTreeMap<String, TermCounts>,
    idf: IdfTable,
}

impl CorpusIndex {
    /// Tokenize every document and compute the file-level IDF table.
    ///
    /// Per-file tokenization is a pure map and runs in parallel; the
    /// results are collected back into a `BTreeMap`, so the ranking
    /// order downstream is identical to a sequential build.
    pub fn build(documents: BTreeMap<String, String>) -> Self {
        let terms: BTreeMap<String, TermCounts> = documents
            .par_iter()
            .map(|(name, text)| (name.clone(), tokenize::term_counts(text)))
            .collect();
        let idf = idf::compute_idf(terms.values());

        debug!(
            documents = documents.len(),
            vocabulary = idf.len(),
            "corpus indexed"
        );

        Self {
            documents,
            terms,
            idf,
        }
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Distinct terms observed across the whole corpus.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Rank all files against `query_text`, returning the top `n`.
    pub fn rank_files(&self, query_text: &str, n: usize) -> Vec<RankedFile> {
        let query = tokenize::query_terms(query_text);
        rank::rank_files(&query, &self.terms, &self.idf, n)
    }

    /// Answer a query: shortlist files, extract their sentences, rank
    /// the sentences with a fresh sentence-level IDF table.
    ///
    /// Unknown query terms contribute nothing; an empty corpus or an
    /// empty shortlist yields an empty answer rather than an error.
    pub fn answer(&self, query_text: &str, limits: Limits) -> Vec<ScoredSentence> {
        let query = tokenize::query_terms(query_text);
        let shortlist =
            rank::rank_files(&query, &self.terms, &self.idf, limits.file_matches);
        debug!(
            query_terms = query.len(),
            shortlisted = shortlist.len(),
            "files ranked"
        );

        let sentences = self.extract_sentences(&shortlist);
        if sentences.is_empty() {
            return Vec::new();
        }

        // The sentence-level IDF is computed over only these candidates,
        // independently of the file-level table.
        let sentence_idf = idf::compute_idf(sentences.iter().map(|s| &s.terms));
        debug!(
            candidates = sentences.len(),
            vocabulary = sentence_idf.len(),
            "sentences extracted"
        );

        rank::rank_sentences(&query, &sentences, &sentence_idf, limits.sentence_matches)
    }

    /// Candidate sentences from the shortlisted files, in document order.
    ///
    /// Sentences whose multiset tokenizes to nothing can never match a
    /// query and are dropped here, which also keeps the density
    /// denominator nonzero. Duplicate sentence text keeps its first
    /// occurrence.
    fn extract_sentences(&self, shortlist: &[RankedFile]) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        let mut seen = HashSet::new();

        for file in shortlist {
            let Some(text) = self.documents.get(&file.name) else {
                continue;
            };
            for raw in sentence::split_sentences(text) {
                let terms = tokenize::term_counts(&raw);
                if terms.is_empty() {
                    continue;
                }
                if !seen.insert(raw.clone()) {
                    continue;
                }
                sentences.push(Sentence { text: raw, terms });
            }
        }

        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[(&str, &str)]) -> BTreeMap<String, String> {
        docs.iter()
            .map(|(name, text)| (name.to_string(), text.to_string()))
            .collect()
    }

    #[test]
    fn build_counts_documents_and_vocabulary() {
        let index = CorpusIndex::build(corpus(&[
            ("doc1.txt", "The cat sat on the mat."),
            ("doc2.txt", "Dogs bark loudly at night."),
        ]));
        assert_eq!(index.document_count(), 2);
        // cat, sat, mat, dogs, bark, loudly, night
        assert_eq!(index.vocabulary_size(), 7);
    }

    #[test]
    fn answer_returns_best_sentence_from_top_file() {
        let index = CorpusIndex::build(corpus(&[
            (
                "cats.txt",
                "Cats sleep most of the day. A cat hunts at dawn and dusk.",
            ),
            ("dogs.txt", "Dogs bark loudly. Dogs chase cars."),
        ]));

        let answers = index.answer("When does a cat hunt?", Limits::default());
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].text, "A cat hunts at dawn and dusk.");
        assert!(answers[0].matching_idf > 0.0);
    }

    #[test]
    fn answer_respects_sentence_limit() {
        let index = CorpusIndex::build(corpus(&[(
            "cats.txt",
            "Cats sleep. Cats play. Cats eat.",
        )]));

        let limits = Limits {
            file_matches: 1,
            sentence_matches: 2,
        };
        assert_eq!(index.answer("cats", limits).len(), 2);
    }

    #[test]
    fn answer_searches_multiple_shortlisted_files() {
        let index = CorpusIndex::build(corpus(&[
            ("a.txt", "Cats sleep all day."),
            ("b.txt", "A rare word: quokka. Cats also purr."),
        ]));

        let limits = Limits {
            file_matches: 2,
            sentence_matches: 1,
        };
        let answers = index.answer("quokka", limits);
        assert_eq!(answers.len(), 1);
        assert!(answers[0].text.contains("quokka"));
    }

    #[test]
    fn empty_corpus_answers_empty() {
        let index = CorpusIndex::build(BTreeMap::new());
        assert_eq!(index.document_count(), 0);
        assert!(index.vocabulary_size() == 0);
        assert!(index.answer("anything", Limits::default()).is_empty());
    }

    #[test]
    fn unknown_terms_still_shortlist_files() {
        let index = CorpusIndex::build(corpus(&[
            ("doc1.txt", "The cat sat on the mat."),
            ("doc2.txt", "Dogs bark loudly at night."),
        ]));

        let ranked = index.rank_files("zebra", 2);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|f| f.score == 0.0));
    }

    #[test]
    fn duplicate_sentences_collapse_to_first_occurrence() {
        let index = CorpusIndex::build(corpus(&[(
            "echo.txt",
            "Cats sleep. Cats sleep. Cats sleep.",
        )]));

        let limits = Limits {
            file_matches: 1,
            sentence_matches: 5,
        };
        let answers = index.answer("cats", limits);
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn stopword_only_sentences_are_not_candidates() {
        let index = CorpusIndex::build(corpus(&[(
            "doc.txt",
            "And so it was. Cats sleep in sunbeams.",
        )]));

        let limits = Limits {
            file_matches: 1,
            sentence_matches: 5,
        };
        let answers = index.answer("cats", limits);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].text, "Cats sleep in sunbeams.");
    }

    #[test]
    fn sentence_idf_is_independent_of_file_idf() {
        // "moon" appears in both documents (file idf 0) but in only one
        // sentence of the top file, so it still discriminates there.
        let index = CorpusIndex::build(corpus(&[
            ("a.txt", "The moon rises over hills. Stars glitter brightly."),
            ("b.txt", "A moon landing happened."),
        ]));

        let answers = index.answer("moon rises", Limits::default());
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].text, "The moon rises over hills.");
        assert!(answers[0].matching_idf > 0.0);
    }
}
