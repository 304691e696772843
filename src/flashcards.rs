//! Multiple-choice flashcards.
//!
//! A deck is up to [`DECK_SIZE`] shuffled items from one tier. Each card is shown
//! in Aurebesh and the player picks its English reading from [`OPTION_COUNT`]
//! choices. Scoring at least 65% of the deck unlocks the next tier.
//!
//! # Error Codes
//!
//! - F001: `UnknownTier` (Tier number outside 1-3)
//! - F002: `EmptyDeck` (Tier has no items)
//! - F003: `DeckFinished` (Every card has been answered)

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::format_error_with_code_and_help;
use crate::storage::{GameProgress, GameProgressPatch, Storage, StorageError};
use crate::tiers::Tier;
use crate::transliterate::english_to_aurebesh;

pub const DECK_SIZE: usize = 25;
pub const OPTION_COUNT: usize = 4;
/// Pass mark, in percent of the deck.
pub const PASS_PERCENT: usize = 65;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlashcardError {
    #[error("Unknown tier {tier}")]
    UnknownTier { tier: u8 },

    #[error("{tier} has no cards")]
    EmptyDeck { tier: Tier },

    #[error("All {total} cards have been answered")]
    DeckFinished { total: usize },
}

impl FlashcardError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            FlashcardError::UnknownTier { .. } => "F001",
            FlashcardError::EmptyDeck { .. } => "F002",
            FlashcardError::DeckFinished { .. } => "F003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            FlashcardError::UnknownTier { .. } => "Tier number outside 1-3",
            FlashcardError::EmptyDeck { .. } => "Tier has no items",
            FlashcardError::DeckFinished { .. } => "Every card has been answered",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            FlashcardError::UnknownTier { .. } => "Flashcards are drawn from tier 1 (letters), 2 (vocabulary) or 3 (quotes).",
            FlashcardError::EmptyDeck { .. } => "A deck needs at least one item to quiz on.",
            FlashcardError::DeckFinished { .. } => "The deck has no current card. Check the result or deal a new deck.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            FlashcardError::UnknownTier { .. } => Some("Use tier numbers 1, 2 or 3"),
            FlashcardError::EmptyDeck { .. } => None,
            FlashcardError::DeckFinished { .. } => Some("Deal a new deck to keep practicing"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub correct: bool,
    pub expected: String,
}

#[derive(Debug, Clone)]
pub struct FlashcardDeck {
    tier: Tier,
    cards: Vec<String>,
    current: usize,
    score: usize,
}

impl FlashcardDeck {
    /// Deal a shuffled deck for `tier`.
    ///
    /// # Errors
    ///
    /// [`FlashcardError::EmptyDeck`] if the tier has no items.
    pub fn new<R: Rng + ?Sized>(tier: Tier, rng: &mut R) -> Result<Self, FlashcardError> {
        let mut cards = tier.items();
        if cards.is_empty() {
            return Err(FlashcardError::EmptyDeck { tier });
        }
        cards.shuffle(rng);
        cards.truncate(DECK_SIZE);
        debug!("Dealt {} cards from {tier}", cards.len());
        Ok(Self { tier, cards, current: 0, score: 0 })
    }

    /// Deal a deck from a 1-based tier number.
    ///
    /// # Errors
    ///
    /// [`FlashcardError::UnknownTier`] for numbers outside 1-3.
    pub fn for_tier_number<R: Rng + ?Sized>(tier: u8, rng: &mut R) -> Result<Self, FlashcardError> {
        let tier = Tier::from_number(tier).ok_or(FlashcardError::UnknownTier { tier })?;
        Self::new(tier, rng)
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.cards.len()
    }

    /// English text of the card being asked.
    #[must_use]
    pub fn current_card(&self) -> Option<&str> {
        self.cards.get(self.current).map(String::as_str)
    }

    /// The current card rendered in Aurebesh.
    #[must_use]
    pub fn prompt(&self) -> Option<String> {
        self.current_card().map(english_to_aurebesh)
    }

    /// Shuffled answer choices for the current card: the right answer plus up
    /// to three others from the same tier.
    ///
    /// # Errors
    ///
    /// [`FlashcardError::DeckFinished`] when there is no current card.
    pub fn options<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<String>, FlashcardError> {
        let correct = self.current_card().ok_or(FlashcardError::DeckFinished { total: self.len() })?;
        let others: Vec<String> = self.tier.items().into_iter().filter(|item| item != correct).collect();

        let mut options: Vec<String> = others.choose_multiple(rng, OPTION_COUNT - 1).cloned().collect();
        options.push(correct.to_string());
        options.shuffle(rng);
        Ok(options)
    }

    /// Answer the current card and move to the next one.
    ///
    /// # Errors
    ///
    /// [`FlashcardError::DeckFinished`] when there is no current card.
    pub fn answer(&mut self, choice: &str) -> Result<AnswerOutcome, FlashcardError> {
        let expected = self
            .current_card()
            .ok_or(FlashcardError::DeckFinished { total: self.len() })?
            .to_string();
        let correct = choice == expected;
        if correct {
            self.score += 1;
        }
        self.current += 1;
        Ok(AnswerOutcome { correct, expected })
    }

    /// Score needed to pass: 65% of the deck, rounded up.
    #[must_use]
    pub fn required_score(&self) -> usize {
        (self.len() * PASS_PERCENT).div_ceil(100)
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.is_finished() && self.score >= self.required_score()
    }

    /// Changes a finished deck makes to `progress`: a better best score for this
    /// tier, and the next tier unlocked on a pass. `None` if nothing changes.
    #[must_use]
    pub fn progress_patch(&self, progress: &GameProgress) -> Option<GameProgressPatch> {
        if !self.is_finished() {
            return None;
        }

        let mut patch = GameProgressPatch::default();
        let score = u32::try_from(self.score).unwrap_or(u32::MAX);
        if score > progress.flashcard_stats.score(self.tier) {
            let mut stats = progress.flashcard_stats;
            *stats.score_mut(self.tier) = score;
            patch.flashcard_stats = Some(stats);
        }

        if self.passed() {
            if let Some(next) = self.tier.next().filter(|&t| !progress.is_unlocked(t)) {
                let mut tiers = progress.unlocked_tiers.clone();
                tiers.push(next.number());
                patch.unlocked_tiers = Some(tiers);
                info!("Unlocked {next}");
            }
        }

        (patch != GameProgressPatch::default()).then_some(patch)
    }

    /// Apply [`FlashcardDeck::progress_patch`] to `storage`.
    ///
    /// # Errors
    ///
    /// Propagates any [`StorageError`] from the update.
    pub fn record_result<S: Storage + ?Sized>(&self, storage: &mut S) -> Result<GameProgress, StorageError> {
        let progress = storage.game_progress();
        match self.progress_patch(&progress) {
            Some(patch) => storage.update_game_progress(patch),
            None => Ok(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(25)
    }

    fn play(deck: &mut FlashcardDeck, right: usize) {
        let mut answered = 0;
        while let Some(card) = deck.current_card().map(str::to_string) {
            let choice = if answered < right { card } else { "wrong".to_string() };
            deck.answer(&choice).unwrap();
            answered += 1;
        }
    }

    #[test]
    fn test_deck_size_and_uniqueness() {
        let deck = FlashcardDeck::new(Tier::Letters, &mut rng()).unwrap();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<_> = deck.cards().iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        let items = Tier::Letters.items();
        assert!(deck.cards().iter().all(|c| items.contains(c)));
    }

    #[test]
    fn test_unknown_tier() {
        let err = FlashcardDeck::for_tier_number(7, &mut rng()).unwrap_err();
        assert_eq!(err, FlashcardError::UnknownTier { tier: 7 });
        assert_eq!(err.code(), "F001");
    }

    #[test]
    fn test_options_contain_answer_once() {
        let mut r = rng();
        let deck = FlashcardDeck::new(Tier::Vocabulary, &mut r).unwrap();
        let options = deck.options(&mut r).unwrap();
        assert_eq!(options.len(), OPTION_COUNT);
        let correct = deck.current_card().unwrap();
        assert_eq!(options.iter().filter(|o| o.as_str() == correct).count(), 1);
        let unique: HashSet<_> = options.iter().collect();
        assert_eq!(unique.len(), OPTION_COUNT);
    }

    #[test]
    fn test_prompt_is_aurebesh() {
        let deck = FlashcardDeck::new(Tier::Letters, &mut rng()).unwrap();
        let card = deck.current_card().unwrap().to_string();
        assert_eq!(deck.prompt(), Some(english_to_aurebesh(&card)));
    }

    #[test]
    fn test_answer_scores_and_advances() {
        let mut deck = FlashcardDeck::new(Tier::Quotes, &mut rng()).unwrap();
        let first = deck.current_card().unwrap().to_string();
        let outcome = deck.answer(&first).unwrap();
        assert!(outcome.correct);
        assert_eq!(deck.score(), 1);

        let outcome = deck.answer("nope").unwrap();
        assert!(!outcome.correct);
        assert_eq!(deck.score(), 1);
        assert_ne!(outcome.expected, "nope");
    }

    #[test]
    fn test_finished_deck_errors() {
        let mut deck = FlashcardDeck::new(Tier::Letters, &mut rng()).unwrap();
        play(&mut deck, 0);
        assert!(deck.is_finished());
        assert_eq!(deck.answer("a"), Err(FlashcardError::DeckFinished { total: DECK_SIZE }));
        assert!(deck.options(&mut rng()).is_err());
        assert_eq!(deck.prompt(), None);
    }

    #[test]
    fn test_required_score_rounds_up() {
        let deck = FlashcardDeck::new(Tier::Letters, &mut rng()).unwrap();
        assert_eq!(deck.required_score(), 17);
    }

    #[test]
    fn test_pass_unlocks_next_tier() {
        let mut storage = MemStorage::with_seed(1);
        let mut deck = FlashcardDeck::new(Tier::Letters, &mut rng()).unwrap();
        play(&mut deck, 17);
        assert!(deck.passed());

        let progress = deck.record_result(&mut storage).unwrap();
        assert_eq!(progress.unlocked_tiers, vec![1, 2]);
        assert_eq!(progress.flashcard_stats.tier1_score, 17);
    }

    #[test]
    fn test_fail_records_score_only() {
        let mut storage = MemStorage::with_seed(2);
        let mut deck = FlashcardDeck::new(Tier::Letters, &mut rng()).unwrap();
        play(&mut deck, 16);
        assert!(!deck.passed());

        let progress = deck.record_result(&mut storage).unwrap();
        assert_eq!(progress.unlocked_tiers, vec![1]);
        assert_eq!(progress.flashcard_stats.tier1_score, 16);
    }

    #[test]
    fn test_no_patch_for_unfinished_or_worse_result() {
        let mut deck = FlashcardDeck::new(Tier::Quotes, &mut rng()).unwrap();
        let progress = GameProgress::default();
        assert_eq!(deck.progress_patch(&progress), None);

        play(&mut deck, 0);
        assert_eq!(deck.progress_patch(&progress), None);
    }

    #[test]
    fn test_last_tier_unlocks_nothing() {
        let mut deck = FlashcardDeck::new(Tier::Quotes, &mut rng()).unwrap();
        let total = deck.len();
        play(&mut deck, total);
        let progress = GameProgress { unlocked_tiers: vec![1, 2, 3], ..GameProgress::default() };
        let patch = deck.progress_patch(&progress).unwrap();
        assert_eq!(patch.unlocked_tiers, None);
        assert_eq!(patch.flashcard_stats.unwrap().tier3_score, total as u32);
    }
}
