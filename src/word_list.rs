//! `word_list`: load custom word lists for the word-search game
//!
//! A word list can come from a file (CLI) or from an in-memory string (the WASM
//! build, where the browser hands us the text it fetched).
//!
//! The parsing logic:
//! - One word (or short phrase) per line.
//! - Surrounding whitespace is trimmed; blank lines are skipped.
//! - Lines starting with `#` are comments.
//! - Entries are uppercased, matching how the grid stores them.
//! - Repeats are dropped, keeping the first occurrence, so the game gets the
//!   unique word set it expects. Order is otherwise preserved, since placement
//!   order matters.

use std::collections::HashSet;

/// A processed, ready-to-place word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Uppercased, unique words in file order.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string. WASM-safe.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut seen = HashSet::new();
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_uppercase)
            .filter(|word| seen.insert(word.clone()))
            .collect();

        WordList { words }
    }

    /// Keep only words that can fit in a `size × size` grid.
    #[must_use]
    pub fn fitting(mut self, size: usize) -> WordList {
        self.words.retain(|w| w.chars().count() <= size);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let list = WordList::parse_from_str("jedi\nsith\nwookiee");
        assert_eq!(list.words, vec!["JEDI", "SITH", "WOOKIEE"]);
    }

    #[test]
    fn test_parse_keeps_order_and_drops_repeats() {
        let list = WordList::parse_from_str("sith\njedi\nSITH\nJedi\nhoth");
        assert_eq!(list.words, vec!["SITH", "JEDI", "HOTH"]);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let list = WordList::parse_from_str("# planets\n\n  hoth  \n\t\n#endor\nnaboo\n");
        assert_eq!(list.words, vec!["HOTH", "NABOO"]);
    }

    #[test]
    fn test_parse_keeps_phrases() {
        let list = WordList::parse_from_str("obi wan\nx-wing");
        assert_eq!(list.words, vec!["OBI WAN", "X-WING"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").is_empty());
    }

    #[test]
    fn test_fitting() {
        let list = WordList::parse_from_str("yoda\nlightsaber\nhan").fitting(5);
        assert_eq!(list.words, vec!["YODA", "HAN"]);
        assert_eq!(list.len(), 2);
    }
}
