use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Parse newline-delimited words, skipping blank lines and keeping file order.
pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Load the word list from `path`.
///
/// A missing or unreadable file yields an empty list; callers treat that as "no data".
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Vec<String> {
    let path = path.as_ref();
    match read_words(path) {
        Ok(words) => {
            crate::info_log!("Loaded {} words from {}", words.len(), path.display());
            words
        }
        Err(e) => {
            log::warn!("Could not read word list '{}': {e}", path.display());
            Vec::new()
        }
    }
}
