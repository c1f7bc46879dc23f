use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::{DEFAULT_FILE_MATCHES, DEFAULT_SENTENCE_MATCHES};

#[derive(Debug, Parser)]
#[command(
    name = "quaero",
    about = "Ask questions of a directory of text files"
)]
pub struct Cli {
    /// Directory containing the corpus as .txt files
    pub corpus: PathBuf,

    /// Answer a single query and exit instead of prompting interactively
    #[arg(short, long)]
    pub query: Option<String>,

    /// Number of top-ranked sentences to print per query
    #[arg(short = 'n', long, default_value_t = DEFAULT_SENTENCE_MATCHES)]
    pub sentences: usize,

    /// Number of top-ranked files to extract candidate sentences from
    #[arg(long, default_value_t = DEFAULT_FILE_MATCHES)]
    pub files: usize,

    /// Output answers as JSON with scores
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["quaero", "corpus"]);
        assert_eq!(cli.corpus, PathBuf::from("corpus"));
        assert_eq!(cli.sentences, 1);
        assert_eq!(cli.files, 1);
        assert!(cli.query.is_none());
        assert!(!cli.json);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_one_shot_query() {
        let cli = Cli::parse_from([
            "quaero", "corpus", "--query", "what is a cat", "-n", "3",
            "--files", "2", "--json",
        ]);
        assert_eq!(cli.query.as_deref(), Some("what is a cat"));
        assert_eq!(cli.sentences, 3);
        assert_eq!(cli.files, 2);
        assert!(cli.json);
    }

    #[test]
    fn missing_corpus_argument_is_a_usage_error() {
        assert!(Cli::try_parse_from(["quaero"]).is_err());
    }
}
