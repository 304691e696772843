//! A single word-search play session.
//!
//! [`WordSearchGame`] owns one [`Grid`] and drives it through the selection
//! flow a player sees: tap a start cell, tap an end cell, and the line between
//! them is checked. Found words are recorded and their cells flagged. Once every
//! word is found the session is complete and further selections are refused.

use std::collections::HashSet;

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::WordSearchError;
use crate::word_search::{check_match, place_words, GameState, Grid, Placement, Position};

/// Default settings for a new puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSearchConfig {
    /// Side length of the square grid.
    pub size: usize,
    /// How many tier words a default game hides.
    pub word_count: usize,
}

impl Default for WordSearchConfig {
    fn default() -> Self {
        Self { size: 8, word_count: 6 }
    }
}

/// Result of one click on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "word")]
pub enum ClickOutcome {
    /// First click of a selection; waiting for the end cell.
    SelectionStarted,
    /// The selection spelled this word.
    Found(String),
    /// The selection didn't spell any remaining word.
    Missed,
}

#[derive(Debug, Clone)]
pub struct WordSearchGame {
    placement: Placement,
    pending_start: Option<Position>,
}

/// Uppercase and check the word list, returning the normalized words.
fn validate_words<S: AsRef<str>>(words: &[S], size: usize) -> Result<Vec<String>, WordSearchError> {
    if size == 0 {
        return Err(WordSearchError::InvalidSize { size });
    }
    if words.is_empty() {
        return Err(WordSearchError::NoWords);
    }

    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(words.len());
    for (index, word) in words.iter().enumerate() {
        let word = word.as_ref().trim().to_uppercase();
        if word.is_empty() {
            return Err(WordSearchError::EmptyWord { index });
        }
        if !seen.insert(word.clone()) {
            return Err(WordSearchError::DuplicateWord { word });
        }
        normalized.push(word);
    }

    Ok(normalized)
}

impl WordSearchGame {
    /// Generate a new puzzle.
    ///
    /// # Errors
    ///
    /// Returns a [`WordSearchError`] if `size` is zero, the list is empty, or a
    /// word is blank or repeated (ignoring case). Words that merely don't fit
    /// are not an error; see [`WordSearchGame::skipped_words`].
    pub fn new<S: AsRef<str>, R: Rng + ?Sized>(words: &[S], size: usize, rng: &mut R) -> Result<Self, WordSearchError> {
        let words = validate_words(words, size)?;
        let placement = place_words(&words, size, rng);
        info!("New word search: {} words on a {size}x{size} grid", words.len());
        Ok(Self::from_placement(placement))
    }

    /// Wrap an existing placement (e.g. one restored from JSON).
    #[must_use]
    pub fn from_placement(placement: Placement) -> Self {
        Self { placement, pending_start: None }
    }

    /// Throw the grid away and place the same words again.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let words = self.placement.grid.words_to_find.clone();
        self.placement = place_words(&words, self.placement.grid.size, rng);
        self.pending_start = None;
        debug!("Word search restarted");
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.placement.grid
    }

    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.placement.grid.state()
    }

    #[must_use]
    pub fn skipped_words(&self) -> &[String] {
        &self.placement.skipped
    }

    #[must_use]
    pub fn remaining_words(&self) -> Vec<&str> {
        self.placement.grid.remaining_words().collect()
    }

    #[must_use]
    pub fn pending_start(&self) -> Option<Position> {
        self.pending_start
    }

    pub fn clear_selection(&mut self) {
        self.pending_start = None;
    }

    /// Check the line from `start` to `end`, recording the word if it matches.
    ///
    /// # Errors
    ///
    /// [`WordSearchError::GameComplete`] once every word has been found.
    pub fn select(&mut self, start: Position, end: Position) -> Result<Option<String>, WordSearchError> {
        let grid = &mut self.placement.grid;
        if grid.is_complete() {
            return Err(WordSearchError::GameComplete { total: grid.words_to_find.len() });
        }

        let found = check_match(grid, start, end);
        match &found {
            Some(word) => {
                grid.record_found(word, start, end);
                info!("Found {word} ({}/{})", grid.found_words.len(), grid.words_to_find.len());
            }
            None => debug!("No word between {start} and {end}"),
        }

        Ok(found)
    }

    /// Register a click: the first starts a selection, the second finishes it.
    ///
    /// # Errors
    ///
    /// [`WordSearchError::GameComplete`] once every word has been found.
    pub fn click(&mut self, pos: Position) -> Result<ClickOutcome, WordSearchError> {
        if self.placement.grid.is_complete() {
            return Err(WordSearchError::GameComplete { total: self.placement.grid.words_to_find.len() });
        }

        match self.pending_start.take() {
            None => {
                self.pending_start = Some(pos);
                Ok(ClickOutcome::SelectionStarted)
            }
            Some(start) => Ok(match self.select(start, pos)? {
                Some(word) => ClickOutcome::Found(word),
                None => ClickOutcome::Missed,
            }),
        }
    }

    /// Finish a selection started with [`WordSearchGame::click`].
    ///
    /// # Errors
    ///
    /// [`WordSearchError::NoPendingSelection`] if no start cell is pending, or
    /// [`WordSearchError::GameComplete`] once every word has been found.
    pub fn finish_selection(&mut self, end: Position) -> Result<Option<String>, WordSearchError> {
        let start = self.pending_start.take().ok_or(WordSearchError::NoPendingSelection)?;
        self.select(start, end)
    }
}
