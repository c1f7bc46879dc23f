//! quaero - extractive question answering over a directory of text files.
//!
//! quaero loads every `.txt` file in a directory, ranks the files against
//! a query by TF-IDF, then ranks the sentences of the top file(s) by
//! matching-term IDF with query term density as the tie-break, and
//! returns the best sentence(s) verbatim. It extracts, it never
//! generates.
//!
//! # Quick start
//!
//! ```no_run
//! use quaero::{CorpusIndex, Limits, corpus};
//!
//! let documents = corpus::load_corpus(std::path::Path::new("corpus")).unwrap();
//! let index = CorpusIndex::build(documents);
//!
//! for answer in index.answer("When was Python first released?", Limits::default()) {
//!     println!("{}", answer.text);
//! }
//! ```

pub mod cli;
pub mod corpus;
pub mod error;
pub mod idf;
pub mod pipeline;
pub mod rank;
pub mod sentence;
pub mod tokenize;

pub use error::{Error, Result};
pub use idf::IdfTable;
pub use pipeline::{CorpusIndex, Limits};
pub use rank::{RankedFile, ScoredSentence};
