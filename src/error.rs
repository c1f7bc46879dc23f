use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corpus directory does not exist or is not a directory: {0}")]
    CorpusDir(PathBuf),

    #[error("failed to read corpus file {path}: {source}")]
    CorpusFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
