//! Word-search grid generation and selection matching.
//!
//! A puzzle is a square grid of letters with a list of words hidden along four
//! directions. Generation is a bounded rejection sampler: each word gets up to
//! [`MAX_PLACEMENT_ATTEMPTS`] random (direction, anchor) draws, and a draw is kept
//! only if every cell it covers is empty or already holds the same letter.
//! Words that never fit are skipped, not fatal. Leftover cells get random A–Z.
//!
//! Reversed words are never placed; instead [`check_match`] accepts a selection
//! read in either direction.
//!
//! # Examples
//!
//! ```
//! use aurebesh::word_search::{check_match, place_words};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let placement = place_words(&["jedi", "sith"], 8, &mut rng);
//! assert!(placement.skipped.is_empty());
//!
//! let jedi = placement.placed_word("JEDI").expect("JEDI fits in an 8x8 grid");
//! let found = check_match(&placement.grid, jedi.end, jedi.start);
//! assert_eq!(found.as_deref(), Some("JEDI"));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Range};

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::alphabet::{ALPHABET_SIZE, FILL_LETTERS};

/// How many random placements we try per word before giving up on it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// A grid coordinate. Signed so that out-of-grid selections can be expressed;
/// `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Per-axis unit step (-1, 0 or +1) pointing from `self` towards `to`.
    #[must_use]
    pub fn step_towards(self, to: Position) -> Position {
        Position::new(unit_step(self.x, to.x), unit_step(self.y, to.y))
    }
}

fn unit_step(from: i32, to: i32) -> i32 {
    match to.cmp(&from) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four directions words are laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Unit step `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> Position {
        match self {
            Direction::Horizontal => Position::new(1, 0),
            Direction::Vertical => Position::new(0, 1),
            Direction::DiagonalDownRight => Position::new(1, 1),
            Direction::DiagonalDownLeft => Position::new(-1, 1),
        }
    }
}

/// One square of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// `None` only between allocation and the final random fill.
    pub letter: Option<char>,
    pub x: usize,
    pub y: usize,
    pub is_found: bool,
    /// Last word written through this cell, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belongs_to_word: Option<String>,
}

/// Progress of a single puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    InProgress,
    Complete,
}

/// A square letter grid plus the words hidden in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    /// Row-major: `cells[y][x]`.
    pub cells: Vec<Vec<Cell>>,
    pub words_to_find: Vec<String>,
    pub found_words: Vec<String>,
    pub size: usize,
}

impl Grid {
    /// Build an empty `size × size` grid. Each cell knows its own coordinates.
    #[must_use]
    pub fn allocate(size: usize) -> Grid {
        let cells = (0..size)
            .map(|y| {
                (0..size)
                    .map(|x| Cell { letter: None, x, y, is_found: false, belongs_to_word: None })
                    .collect()
            })
            .collect();

        Grid { cells, words_to_find: Vec::new(), found_words: Vec::new(), size }
    }

    /// Whether `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    // Checked against the rows actually present as well as `size`, so a grid
    // restored from JSON with ragged or short rows can't index out of bounds.
    fn index_of(&self, pos: Position) -> Option<(usize, usize)> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        let in_row = self.cells.get(y).is_some_and(|row| x < row.len());
        (x < self.size && y < self.size && in_row).then_some((x, y))
    }

    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        let (x, y) = self.index_of(pos)?;
        self.cells.get(y)?.get(x)
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let (x, y) = self.index_of(pos)?;
        self.cells.get_mut(y)?.get_mut(x)
    }

    /// Whether `cells` is exactly `size` rows of `size` cells.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.cells.len() == self.size && self.cells.iter().all(|row| row.len() == self.size)
    }

    #[must_use]
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        self.cell(pos).and_then(|c| c.letter)
    }

    /// Cells visited walking from `start` towards `end`, inclusive.
    ///
    /// The step is the per-axis sign of `end - start`, so only straight and
    /// 45° lines reach `end`. Any other pair walks until it leaves the grid,
    /// and a walk that leaves the grid stops there. A `start` outside the grid
    /// yields nothing.
    #[must_use]
    pub fn walk(&self, start: Position, end: Position) -> Vec<Position> {
        let step = start.step_towards(end);
        let mut visited = Vec::new();
        let mut pos = start;

        while self.contains(pos) {
            visited.push(pos);
            if pos == end {
                break;
            }
            pos = pos + step;
        }

        visited
    }

    /// Letters along [`Grid::walk`], concatenated.
    #[must_use]
    pub fn letters_between(&self, start: Position, end: Position) -> String {
        self.walk(start, end).into_iter().filter_map(|p| self.letter_at(p)).collect()
    }

    /// `words_to_find` entry equal to `candidate` that hasn't been found yet.
    fn unfound_word(&self, candidate: &str) -> Option<&String> {
        self.words_to_find
            .iter()
            .find(|w| w.as_str() == candidate && !self.found_words.iter().any(|f| f == *w))
    }

    /// Record `word` as found and flag every in-grid cell between `start` and `end`.
    pub fn record_found(&mut self, word: &str, start: Position, end: Position) {
        for pos in self.walk(start, end) {
            if let Some(cell) = self.cell_mut(pos) {
                cell.is_found = true;
            }
        }
        self.found_words.push(word.to_string());
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        if self.found_words.len() >= self.words_to_find.len() {
            GameState::Complete
        } else {
            GameState::InProgress
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state() == GameState::Complete
    }

    /// Words still to be found, in `words_to_find` order.
    pub fn remaining_words(&self) -> impl Iterator<Item = &str> {
        self.words_to_find
            .iter()
            .filter(|w| !self.found_words.contains(w))
            .map(String::as_str)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.letter.unwrap_or('.').to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Where a word ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    pub word: String,
    pub start: Position,
    pub end: Position,
    pub direction: Direction,
}

/// Output of [`place_words`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub grid: Grid,
    /// Successfully placed words, in input order.
    pub placed: Vec<PlacedWord>,
    /// Uppercased words that could not be placed. They still appear in
    /// `grid.words_to_find` but can never be found.
    pub skipped: Vec<String>,
}

impl Placement {
    #[must_use]
    pub fn placed_word(&self, word: &str) -> Option<&PlacedWord> {
        self.placed.iter().find(|p| p.word == word)
    }
}

/// Range of anchor coordinates on one axis that keeps a word of `len` letters
/// inside a grid of `size`. `None` when the word cannot fit along this axis.
fn anchor_range(step: i32, len: usize, size: usize) -> Option<Range<usize>> {
    match step {
        1 => (len <= size).then(|| 0..size - len + 1),
        -1 => (len <= size).then(|| len - 1..size),
        _ => (size > 0).then_some(0..size),
    }
}

fn try_place(grid: &mut Grid, word: &str, letters: &[char], direction: Direction, anchor: Position) -> Option<PlacedWord> {
    let step = direction.delta();
    let mut coords = Vec::with_capacity(letters.len());
    let mut pos = anchor;

    for &letter in letters {
        match grid.cell(pos)?.letter {
            Some(existing) if existing != letter => return None,
            _ => coords.push(pos),
        }
        pos = pos + step;
    }

    for (&pos, &letter) in coords.iter().zip(letters) {
        if let Some(cell) = grid.cell_mut(pos) {
            cell.letter = Some(letter);
            cell.belongs_to_word = Some(word.to_string());
        }
    }

    Some(PlacedWord {
        word: word.to_string(),
        start: anchor,
        end: *coords.last()?,
        direction,
    })
}

/// Place `words` in a `size × size` grid, in input order, then fill the rest with
/// random letters. See [`place_words_with_attempts`].
pub fn place_words<S: AsRef<str>, R: Rng + ?Sized>(words: &[S], size: usize, rng: &mut R) -> Placement {
    place_words_with_attempts(words, size, MAX_PLACEMENT_ATTEMPTS, rng)
}

/// Place `words` with a custom per-word attempt cap.
///
/// Each attempt draws a direction, then an x anchor, then a y anchor, so the same
/// seed always yields the same grid. Earlier words constrain later ones.
pub fn place_words_with_attempts<S: AsRef<str>, R: Rng + ?Sized>(
    words: &[S],
    size: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Placement {
    let mut grid = Grid::allocate(size);
    let mut placed = Vec::new();
    let mut skipped = Vec::new();

    grid.words_to_find = words.iter().map(|w| w.as_ref().to_uppercase()).collect();

    for word in &grid.words_to_find.clone() {
        let letters: Vec<char> = word.chars().collect();
        let mut result = None;
        let mut attempts = 0;

        while result.is_none() && attempts < max_attempts && !letters.is_empty() {
            attempts += 1;
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
            let step = direction.delta();

            let (Some(xs), Some(ys)) = (
                anchor_range(step.x, letters.len(), size),
                anchor_range(step.y, letters.len(), size),
            ) else {
                continue;
            };
            // grid sizes are small; a coordinate past i32 can't hold a word anyway
            let (Ok(x), Ok(y)) = (i32::try_from(rng.gen_range(xs)), i32::try_from(rng.gen_range(ys))) else {
                continue;
            };

            result = try_place(&mut grid, word, &letters, direction, Position::new(x, y));
        }

        match result {
            Some(p) => {
                debug!("placed {} {:?} from {} to {} after {attempts} attempt(s)", p.word, p.direction, p.start, p.end);
                placed.push(p);
            }
            None => {
                warn!("Could not place word: {word} ({attempts} attempts on a {size}x{size} grid)");
                skipped.push(word.clone());
            }
        }
    }

    for row in &mut grid.cells {
        for cell in row.iter_mut().filter(|c| c.letter.is_none()) {
            cell.letter = Some(FILL_LETTERS[rng.gen_range(0..ALPHABET_SIZE)] as char);
        }
    }

    info!("Generated {size}x{size} word search: {} placed, {} skipped", placed.len(), skipped.len());

    Placement { grid, placed, skipped }
}

/// Check whether the straight line from `start` to `end` spells a word that is
/// still to be found, read forwards or backwards.
///
/// Returns the word as listed in `words_to_find`. Never mutates the grid; the
/// caller records the find (see [`Grid::record_found`]).
#[must_use]
pub fn check_match(grid: &Grid, start: Position, end: Position) -> Option<String> {
    let candidate = grid.letters_between(start, end);
    if candidate.is_empty() {
        return None;
    }

    let reversed: String = candidate.chars().rev().collect();
    grid.unfound_word(&candidate)
        .or_else(|| grid.unfound_word(&reversed))
        .cloned()
}
