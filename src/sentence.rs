//! Rule-based sentence splitting for candidate extraction.
//!
//! Each line of a document is treated as a passage and scanned for
//! sentence boundaries at `.`, `!`, or `?` followed by whitespace or end
//! of line. Closing quotes and brackets stay attached to the sentence
//! they finish. A period does not terminate a sentence when the word
//! before it is a single initial, an acronym with internal periods
//! ("U.S."), or a known abbreviation ("Dr.", "etc.").

/// Characters that may trail a terminator and still belong to the
/// finished sentence.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];

/// Quote and bracket characters stripped when inspecting the word before
/// a terminator.
const OPENERS: &[char] = &['"', '\'', '(', '[', '\u{201c}', '\u{2018}'];

/// Common abbreviations that end with a period mid-sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "al",
    "cf", "fig", "vol", "approx",
];

/// Split `text` into sentences, passage by passage (line by line).
///
/// Sentences are trimmed and never empty; blank lines produce nothing.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for line in text.lines() {
        split_passage(line, &mut sentences);
    }
    sentences
}

fn split_passage(passage: &str, out: &mut Vec<String>) {
    let chars: Vec<char> = passage.trim().chars().collect();
    if chars.is_empty() {
        return;
    }

    let mut start = 0;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if matches!(c, '.' | '!' | '?') {
            let mut end = i + 1;
            while end < chars.len() && CLOSERS.contains(&chars[end]) {
                end += 1;
            }

            let at_end = end >= chars.len();
            let before_space = !at_end && chars[end].is_whitespace();
            if (at_end || before_space) && is_boundary(c, &chars, start, i) {
                push_sentence(&chars[start..end], out);
                i = end;
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                start = i;
                continue;
            }
        }
        i += 1;
    }

    if start < chars.len() {
        push_sentence(&chars[start..], out);
    }
}

fn push_sentence(chars: &[char], out: &mut Vec<String>) {
    let sentence: String = chars.iter().collect();
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        out.push(sentence.to_string());
    }
}

/// Decide whether the terminator at `term_idx` really ends a sentence.
///
/// `!` and `?` always do; `.` is held back after initials, acronyms, and
/// known abbreviations.
fn is_boundary(terminator: char, chars: &[char], start: usize, term_idx: usize) -> bool {
    if terminator != '.' {
        return true;
    }

    let word = preceding_word(chars, start, term_idx);
    if word.chars().count() == 1 && word.chars().all(char::is_alphabetic) {
        return false;
    }
    if word.contains('.') {
        return false;
    }
    if ABBREVIATIONS.contains(&word.to_lowercase().as_str()) {
        return false;
    }

    true
}

/// The word immediately before `term_idx`, without surrounding quotes.
fn preceding_word(chars: &[char], start: usize, term_idx: usize) -> String {
    let mut begin = term_idx;
    while begin > start {
        let c = chars[begin - 1];
        if c.is_whitespace() {
            break;
        }
        begin -= 1;
    }
    chars[begin..term_idx]
        .iter()
        .filter(|c| !OPENERS.contains(c) && !CLOSERS.contains(c))
        .collect()
}
