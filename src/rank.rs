//! File and sentence ranking.
//!
//! Files are scored by summed TF-IDF over the query terms; sentences by
//! summed matching-term IDF with query term density as the tie-break.
//! Both rankers use a stable descending sort over deterministic input
//! order, so equal scores resolve the same way on every run.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::{
    idf::IdfTable,
    tokenize::{self, TermCounts},
};

/// A file together with its summed TF-IDF score for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFile {
    pub name: String,
    pub score: f64,
}

/// A candidate sentence for ranking: its original text plus the term
/// multiset produced by the shared tokenizer.
#[derive(Debug, Clone)]
pub struct Sentence {
    pub text: String,
    pub terms: TermCounts,
}

/// A ranked sentence with both sort keys exposed.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredSentence {
    #[serde(rename = "sentence")]
    pub text: String,
    pub matching_idf: f64,
    pub density: f64,
}

/// Rank `files` against `query` by summed TF-IDF and return the top `n`.
///
/// Each file scores `sum(tf(term, file) * idf(term))` over the query
/// terms, with `tf` the raw count (0 when absent) and unseen terms
/// weighing 0. Files with no query term in common therefore score 0 but
/// still participate, so the result can contain zero-score entries.
///
/// `files` iterates in filename order and the sort is stable, so equal
/// scores tie in ascending filename order.
pub fn rank_files(
    query: &HashSet<String>,
    files: &BTreeMap<String, TermCounts>,
    idf: &IdfTable,
    n: usize,
) -> Vec<RankedFile> {
    let mut ranked: Vec<RankedFile> = files
        .iter()
        .map(|(name, counts)| {
            let score = query
                .iter()
                .map(|term| {
                    let tf = counts.get(term).copied().unwrap_or(0) as f64;
                    tf * idf.weight(term)
                })
                .sum();
            RankedFile {
                name: name.clone(),
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(n);
    ranked
}

/// Rank `sentences` against `query` and return the top `n`.
///
/// The primary key is the summed IDF of the query terms present in the
/// sentence; the tie-break is query term density, the fraction of the
/// sentence's term occurrences that are distinct query-term matches.
///
/// Sentences with an empty term multiset can never match a query and
/// would make the density denominator zero, so they are skipped here
/// even though extraction already filters them out.
///
/// The sort is stable, so full ties keep the extraction order of the
/// input slice.
pub fn rank_sentences(
    query: &HashSet<String>,
    sentences: &[Sentence],
    idf: &IdfTable,
    n: usize,
) -> Vec<ScoredSentence> {
    let mut ranked: Vec<ScoredSentence> = sentences
        .iter()
        .filter_map(|sentence| {
            let total = tokenize::total_terms(&sentence.terms);
            if total == 0 {
                return None;
            }

            let mut matching_idf = 0.0;
            let mut matches = 0u64;
            for term in query {
                if sentence.terms.contains_key(term.as_str()) {
                    matching_idf += idf.weight(term);
                    matches += 1;
                }
            }

            Some(ScoredSentence {
                text: sentence.text.clone(),
                matching_idf,
                density: matches as f64 / total as f64,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.matching_idf
            .total_cmp(&a.matching_idf)
            .then(b.density.total_cmp(&a.density))
    });
    ranked.truncate(n);
    ranked
}
