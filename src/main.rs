use std::io::{BufRead, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quaero::{
    CorpusIndex, Limits, ScoredSentence,
    cli::Cli,
    corpus, error,
};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("QUAERO_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let documents = corpus::load_corpus(&cli.corpus)?;
    info!(documents = documents.len(), "corpus loaded");

    let index = CorpusIndex::build(documents);
    let limits = Limits {
        file_matches: cli.files,
        sentence_matches: cli.sentences,
    };

    if let Some(query) = cli.query.as_deref() {
        answer_query(&index, query, limits, cli.json);
    } else {
        query_loop(&index, limits, cli.json)?;
    }

    Ok(())
}

/// Prompt on stdin for queries until EOF, answering each in turn.
///
/// Sentence-level structures are rebuilt per query inside
/// [`CorpusIndex::answer`]; only the file-level index persists.
fn query_loop(
    index: &CorpusIndex,
    limits: Limits,
    json: bool,
) -> error::Result<()> {
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("Query: ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        answer_query(index, query, limits, json);
    }

    Ok(())
}

fn answer_query(index: &CorpusIndex, query: &str, limits: Limits, json: bool) {
    let answers = index.answer(query, limits);

    if json {
        print_json(query, &answers);
        return;
    }

    if answers.is_empty() {
        println!("No results found.");
        return;
    }
    for answer in &answers {
        println!("{}", answer.text);
    }
}

fn print_json(query: &str, answers: &[ScoredSentence]) {
    let payload = serde_json::json!({
        "query": query,
        "result_count": answers.len(),
        "results": answers,
    });
    println!("{payload}");
}
