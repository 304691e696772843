//! Error types for word-search generation and play, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W006) for documentation lookup:
//!
//! - W001: `InvalidSize` (Grid size must be positive)
//! - W002: `NoWords` (Empty word list)
//! - W003: `EmptyWord` (Blank entry in the word list)
//! - W004: `DuplicateWord` (Same word listed twice)
//! - W005: `GameComplete` (Selection made after every word was found)
//! - W006: `NoPendingSelection` (Selection finished without a start cell)
//!
//! Storage errors (D0XX) live in [`crate::storage`], flashcard errors (F0XX) in
//! [`crate::flashcards`].
//!
//! # Examples
//!
//! ```
//! use aurebesh::errors::WordSearchError;
//! use aurebesh::game::WordSearchGame;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! match WordSearchGame::new(&["jedi", "JEDI"], 8, &mut rng) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "W004");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("duplicates are rejected"),
//! }
//! ```

use std::io;

/// Errors raised by the validated word-search front doors.
///
/// Placement failures are *not* errors: an unplaceable word is reported through
/// [`crate::word_search::Placement::skipped`] instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordSearchError {
    #[error("Invalid grid size: {size}")]
    InvalidSize { size: usize },

    #[error("No words to place")]
    NoWords,

    #[error("Word #{index} is empty")]
    EmptyWord { index: usize },

    #[error("Duplicate word \"{word}\"")]
    DuplicateWord { word: String },

    #[error("All {total} words have already been found")]
    GameComplete { total: usize },

    #[error("No start cell selected")]
    NoPendingSelection,
}

impl From<WordSearchError> for io::Error {
    fn from(e: WordSearchError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    }
}

impl WordSearchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordSearchError::InvalidSize { .. } => "W001",
            WordSearchError::NoWords => "W002",
            WordSearchError::EmptyWord { .. } => "W003",
            WordSearchError::DuplicateWord { .. } => "W004",
            WordSearchError::GameComplete { .. } => "W005",
            WordSearchError::NoPendingSelection => "W006",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            WordSearchError::InvalidSize { .. } => "Grid size must be positive",
            WordSearchError::NoWords => "Empty word list",
            WordSearchError::EmptyWord { .. } => "Blank entry in the word list",
            WordSearchError::DuplicateWord { .. } => "Same word listed twice",
            WordSearchError::GameComplete { .. } => "Selection made after every word was found",
            WordSearchError::NoPendingSelection => "Selection finished without a start cell",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            WordSearchError::InvalidSize { .. } => "Word-search grids are square; a size of zero leaves no cells to place words in.",
            WordSearchError::NoWords => "A game needs at least one word to hide in the grid.",
            WordSearchError::EmptyWord { .. } => "Every word must contain at least one non-whitespace character. Empty words could never be selected.",
            WordSearchError::DuplicateWord { .. } => "Words are compared after uppercasing. A duplicate would be listed twice but could only be found once, so the game could never complete.",
            WordSearchError::GameComplete { .. } => "Once every word has been found the session is terminal and no further selections are checked.",
            WordSearchError::NoPendingSelection => "A selection is made of a start click followed by an end click. The end was submitted without a start.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordSearchError::InvalidSize { .. } => Some("Use a size of at least the longest word, e.g. 8"),
            WordSearchError::NoWords => Some("Example: pass [\"jedi\", \"sith\"], or use --count 6 or --words-file words.txt"),
            WordSearchError::EmptyWord { .. } => Some("Remove blank lines or empty strings from the word list"),
            WordSearchError::DuplicateWord { .. } => Some("List each word once (comparison ignores case)"),
            WordSearchError::GameComplete { .. } => Some("Start a new game to keep playing"),
            WordSearchError::NoPendingSelection => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
