use std::{collections::BTreeMap, fs, path::Path};

use crate::error::{Error, Result};

/// File extension eligible for corpus loading.
const TEXT_EXTENSION: &str = "txt";

/// Load every `.txt` file directly inside `dir` as one document.
///
/// The document identifier is the filename (including extension) and the
/// content is the full file text. Subdirectories and files with other
/// extensions are ignored; the walk is deliberately non-recursive.
///
/// An unreadable file fails the whole load rather than being silently
/// skipped. The result is a `BTreeMap` so downstream ranking iterates
/// documents in a fixed (filename) order.
pub fn load_corpus(dir: &Path) -> Result<BTreeMap<String, String>> {
    if !dir.is_dir() {
        return Err(Error::CorpusDir(dir.to_path_buf()));
    }

    let mut documents = BTreeMap::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let path = entry.path();
        if !is_text_file(&path) {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let content = fs::read_to_string(&path)
            .map_err(|source| Error::CorpusFile { path, source })?;
        documents.insert(name, content);
    }

    Ok(documents)
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == TEXT_EXTENSION)
}
