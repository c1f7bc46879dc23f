//! Inverse document frequency over a collection of term multisets.
//!
//! The "units" of a collection are whole documents during file ranking
//! and individual sentences during sentence ranking. The two tables are
//! always computed independently and never mixed.

use std::collections::HashMap;

use crate::tokenize::TermCounts;

/// IDF weights for every term observed in at least one unit.
///
/// Defined only for observed terms; [`IdfTable::weight`] falls back to
/// 0.0 for everything else, so unknown query terms contribute nothing to
/// additive scores instead of being errors.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    values: HashMap<String, f64>,
}

impl IdfTable {
    /// The weight for `term`, or 0.0 if the collection never saw it.
    pub fn weight(&self, term: &str) -> f64 {
        self.values.get(term).copied().unwrap_or(0.0)
    }

    /// Whether `term` was observed in the collection.
    pub fn contains(&self, term: &str) -> bool {
        self.values.contains_key(term)
    }

    /// Number of distinct observed terms.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Compute IDF values for a collection of `n` units.
///
/// For every term in the union of the units' term sets,
/// `idf(term) = ln(n / df(term))` where `df` counts the units containing
/// the term at least once, not its total frequency.
///
/// The natural logarithm is a numeric contract, not an implementation
/// detail: callers sum these weights additively and depend on the
/// conventional TF-IDF magnitude.
///
/// Zero units yield an empty table. A term present in every unit gets
/// `ln(1) = 0` and so contributes no discriminative weight. `df >= 1`
/// holds by construction, so no division by zero can occur.
pub fn compute_idf<'a, I>(units: I) -> IdfTable
where
    I: IntoIterator<Item = &'a TermCounts>,
{
    let mut df: HashMap<&'a str, u64> = HashMap::new();
    let mut n = 0u64;

    for counts in units {
        n += 1;
        for term in counts.keys() {
            *df.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    if n == 0 {
        return IdfTable::default();
    }

    let values = df
        .into_iter()
        .map(|(term, df)| (term.to_string(), (n as f64 / df as f64).ln()))
        .collect();
    IdfTable { values }
}
