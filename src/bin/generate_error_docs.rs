//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the codes, descriptions, details, and help text directly
//! from the `WordSearchError`, `FlashcardError` and `StorageError`
//! implementations via their `code()`, `description()`, `details()`, and
//! `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use aurebesh::errors::WordSearchError;
use aurebesh::flashcards::FlashcardError;
use aurebesh::storage::{RecordKind, StorageError};
use aurebesh::tiers::Tier;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**");
                let _ = writeln!($out, "```\n{}\n```\n", help_text);
            }

            let _ = writeln!($out, "**Example error message:**");
            let _ = writeln!($out, "```\n{}\n```\n", error);

            let _ = writeln!($out, "**Detailed format:**");
            let _ = writeln!($out, "```\n{}\n```\n", error.display_detailed());

            let _ = writeln!($out, "---\n");
        }
    };
}

fn all_word_search_error_variants() -> Vec<WordSearchError> {
    vec![
        WordSearchError::InvalidSize { size: 0 },
        WordSearchError::NoWords,
        WordSearchError::EmptyWord { index: 3 },
        WordSearchError::DuplicateWord { word: "JEDI".to_string() },
        WordSearchError::GameComplete { total: 6 },
        WordSearchError::NoPendingSelection,
    ]
}

fn all_flashcard_error_variants() -> Vec<FlashcardError> {
    vec![
        FlashcardError::UnknownTier { tier: 4 },
        FlashcardError::EmptyDeck { tier: Tier::Quotes },
        FlashcardError::DeckFinished { total: 25 },
    ]
}

fn all_storage_error_variants() -> Vec<StorageError> {
    vec![
        StorageError::NotFound { kind: RecordKind::HistoryEntry, id: "3f2a9c1e-0000-4000-8000-000000000000".to_string() },
        StorageError::InvalidFontSize { font_size: 40 },
        StorageError::InvalidTier { tier: 9 },
        StorageError::InvalidRecord { reason: "timestamp is required".to_string() },
    ]
}

fn generate_docs() -> String {
    let mut out = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Word Search Errors (W001–W006)](#word-search-errors)");
    let _ = writeln!(out, "- [Flashcard Errors (F001–F003)](#flashcard-errors)");
    let _ = writeln!(out, "- [Storage Errors (D001–D004)](#storage-errors)\n");

    let _ = writeln!(out, "## Word Search Errors\n");
    let _ = writeln!(out, "Rejected word lists and invalid selections. Words that merely don't fit the grid are reported as skipped, not as errors.\n");
    generate_error_docs!(out, all_word_search_error_variants());

    let _ = writeln!(out, "## Flashcard Errors\n");
    generate_error_docs!(out, all_flashcard_error_variants());

    let _ = writeln!(out, "## Storage Errors\n");
    let _ = writeln!(out, "Errors from the history, saved-phrase, progress and settings store. A rejected update leaves the stored record unchanged.\n");
    generate_error_docs!(out, all_storage_error_variants());

    out
}

fn main() {
    print!("{}", generate_docs());
}
