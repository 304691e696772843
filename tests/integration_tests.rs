//! Integration tests for the Aurebesh library.
//!
//! These tests drive the public API the way the CLI and the browser do: build a
//! puzzle, play it through to the end, translate text, and run flashcard decks
//! against the in-memory store.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use aurebesh::errors::WordSearchError;
use aurebesh::flashcards::{FlashcardDeck, FlashcardError};
use aurebesh::game::{ClickOutcome, WordSearchGame};
use aurebesh::storage::{MemStorage, NewHistoryEntry, NewSavedPhrase, SettingsPatch, Storage, StorageError};
use aurebesh::tiers::Tier;
use aurebesh::transliterate::{aurebesh_to_english, english_to_aurebesh};
use aurebesh::word_list::WordList;
use aurebesh::word_search::{check_match, place_words, Direction, GameState, Grid, Placement, Position};

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Letters along a placed word, read from the grid
fn read_back(placement: &Placement, word: &str) -> String {
    let placed = placement.placed_word(word).expect("word should be placed");
    placement.grid.letters_between(placed.start, placed.end)
}

/// First down-right or down-left diagonal of four cells whose letters, read
/// either way, are none of `words`
fn unmatched_diagonal(grid: &Grid, words: &[&str]) -> (Position, Position) {
    let size = i32::try_from(grid.size).unwrap();
    let down_right = (0..=size - 4)
        .flat_map(|y| (0..=size - 4).map(move |x| (Position::new(x, y), Position::new(x + 3, y + 3))));
    let down_left = (0..=size - 4)
        .flat_map(|y| (3..size).map(move |x| (Position::new(x, y), Position::new(x - 3, y + 3))));

    down_right
        .chain(down_left)
        .find(|&(from, to)| {
            let forward = grid.letters_between(from, to);
            let backward: String = forward.chars().rev().collect();
            forward.len() == 4 && !words.contains(&forward.as_str()) && !words.contains(&backward.as_str())
        })
        .expect("an 8x8 grid has a diagonal that isn't a hidden word")
}

fn history_entry(english: &str, timestamp: &str) -> NewHistoryEntry {
    NewHistoryEntry {
        english: english.to_string(),
        aurebesh: english_to_aurebesh(english),
        favorite: false,
        timestamp: timestamp.to_string(),
    }
}

#[cfg(test)]
mod word_search_scenarios {
    use super::*;

    #[test]
    fn test_jedi_sith_full_game() {
        let mut game = WordSearchGame::new(&["jedi", "sith"], 8, &mut seeded(7)).unwrap();
        assert!(game.skipped_words().is_empty());
        assert_eq!(game.grid().words_to_find, vec!["JEDI", "SITH"]);

        let jedi = game.placement().placed_word("JEDI").unwrap().clone();
        let sith = game.placement().placed_word("SITH").unwrap().clone();

        assert_eq!(game.click(jedi.start).unwrap(), ClickOutcome::SelectionStarted);
        assert_eq!(game.click(jedi.end).unwrap(), ClickOutcome::Found("JEDI".to_string()));
        assert_eq!(game.state(), GameState::InProgress);

        // a four-cell diagonal that spells neither word in either direction
        let (from, to) = unmatched_diagonal(game.grid(), &["JEDI", "SITH"]);
        assert_eq!(game.select(from, to).unwrap(), None);
        assert_eq!(game.click(to).unwrap(), ClickOutcome::SelectionStarted);
        assert_eq!(game.click(from).unwrap(), ClickOutcome::Missed);
        assert_eq!(game.grid().found_words.len(), 1);

        // reversed selection still counts
        assert_eq!(game.select(sith.end, sith.start).unwrap().as_deref(), Some("SITH"));
        assert_eq!(game.state(), GameState::Complete);
        assert_eq!(game.grid().found_words, vec!["JEDI", "SITH"]);

        assert_eq!(game.click(Position::new(0, 0)), Err(WordSearchError::GameComplete { total: 2 }));
    }

    #[test]
    fn test_force_is_found_backwards() {
        let placement = place_words(&["force"], 6, &mut seeded(3));
        let force = placement.placed_word("FORCE").unwrap();

        assert_eq!(check_match(&placement.grid, force.end, force.start).as_deref(), Some("FORCE"));
        assert_eq!(check_match(&placement.grid, force.start, force.end).as_deref(), Some("FORCE"));
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let words = ["yoda", "luke", "leia", "han"];
        let a = place_words(&words, 10, &mut seeded(2024));
        let b = place_words(&words, 10, &mut seeded(2024));
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_placement_reads_back() {
        let words = ["wookiee", "droid", "blaster", "tauntaun", "ewok"];
        for seed in 0..20 {
            let placement = place_words(&words, 10, &mut seeded(seed));
            for placed in &placement.placed {
                assert_eq!(read_back(&placement, &placed.word), placed.word, "seed {seed}");
                assert!(Direction::ALL.contains(&placed.direction));
            }
            assert_eq!(placement.placed.len() + placement.skipped.len(), words.len());
        }
    }

    #[test]
    fn test_word_longer_than_grid_is_reported_not_fatal() {
        let game = WordSearchGame::new(&["lightsaber", "ewok"], 5, &mut seeded(11)).unwrap();
        assert_eq!(game.skipped_words(), ["LIGHTSABER".to_string()]);
        assert!(game.placement().placed_word("EWOK").is_some());
        // skipped words are still listed, so the puzzle can never complete
        assert_eq!(game.grid().words_to_find, vec!["LIGHTSABER", "EWOK"]);
    }

    #[test]
    fn test_grid_is_fully_lettered() {
        let placement = place_words(&["rebel"], 7, &mut seeded(5));
        for row in &placement.grid.cells {
            for cell in row {
                let letter = cell.letter.expect("every cell is filled");
                assert!(letter.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn test_grid_json_round_trip_keeps_matching() {
        let placement = place_words(&["vader"], 6, &mut seeded(17));
        let json = serde_json::to_string(&placement.grid).unwrap();
        assert!(json.contains("\"wordsToFind\""));
        assert!(json.contains("\"isFound\""));

        let grid = serde_json::from_str(&json).unwrap();
        let vader = placement.placed_word("VADER").unwrap();
        assert_eq!(check_match(&grid, vader.start, vader.end).as_deref(), Some("VADER"));
    }
}

#[cfg(test)]
mod error_cases {
    use super::*;

    #[test]
    fn test_invalid_inputs() {
        let mut rng = seeded(0);
        let err = WordSearchGame::new(&["jedi"], 0, &mut rng).unwrap_err();
        assert_eq!(err.code(), "W001");

        let none: [&str; 0] = [];
        assert_eq!(WordSearchGame::new(&none, 8, &mut rng).unwrap_err().code(), "W002");
        assert_eq!(WordSearchGame::new(&["jedi", "JEDI"], 8, &mut rng).unwrap_err().code(), "W004");
    }

    #[test]
    fn test_finish_without_start() {
        let mut game = WordSearchGame::new(&["jedi"], 8, &mut seeded(1)).unwrap();
        assert_eq!(game.finish_selection(Position::new(1, 1)), Err(WordSearchError::NoPendingSelection));
    }

    #[test]
    fn test_selection_off_grid_misses() {
        let mut game = WordSearchGame::new(&["jedi"], 8, &mut seeded(1)).unwrap();
        assert_eq!(game.select(Position::new(-3, -3), Position::new(-1, -1)).unwrap(), None);
        assert!(game.grid().found_words.is_empty());
    }

    #[test]
    fn test_detailed_errors_carry_codes() {
        let detailed = WordSearchError::NoWords.display_detailed();
        assert!(detailed.contains("W002"));

        let detailed = FlashcardError::UnknownTier { tier: 9 }.display_detailed();
        assert!(detailed.contains("F001"));
    }
}

#[cfg(test)]
mod translation {
    use super::*;

    #[test]
    fn test_round_trip_lowercases() {
        let aurebesh = english_to_aurebesh("The Jedi");
        assert!(!aurebesh.chars().any(|c| c.is_ascii_alphabetic()));
        assert_eq!(aurebesh_to_english(&aurebesh), "the jedi");
    }

    #[test]
    fn test_ligatures_shorten_output() {
        assert_eq!(english_to_aurebesh("thing").chars().count(), 3);
    }

    #[test]
    fn test_punctuation_and_digits_pass_through() {
        assert_eq!(aurebesh_to_english(&english_to_aurebesh("r2-d2!")), "r2-d2!");
    }
}

#[cfg(test)]
mod word_lists {
    use super::*;

    #[test]
    fn test_fixture_file() {
        let list = WordList::load_from_path("tests/fixtures/word_list.txt").unwrap();
        assert_eq!(list.words, vec!["HOTH", "ENDOR", "NABOO", "TATOOINE", "KASHYYYK", "DAGOBAH"]);

        let fitting = list.fitting(6);
        assert_eq!(fitting.words, vec!["HOTH", "ENDOR", "NABOO"]);

        let game = WordSearchGame::new(&fitting.words, 6, &mut seeded(8)).unwrap();
        assert!(game.skipped_words().is_empty());
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = WordList::load_from_path("tests/fixtures/no_such_list.txt").unwrap_err();
        assert!(err.to_string().contains("no_such_list.txt"));
    }
}

#[cfg(test)]
mod flashcards_and_storage {
    use super::*;

    fn play_perfect(deck: &mut FlashcardDeck) {
        while let Some(card) = deck.current_card().map(str::to_string) {
            assert!(deck.answer(&card).unwrap().correct);
        }
    }

    #[test]
    fn test_passing_tier_one_unlocks_tier_two() {
        let mut store = MemStorage::with_seed(1);
        let mut rng = seeded(4);
        let mut deck = FlashcardDeck::new(Tier::Letters, &mut rng).unwrap();
        play_perfect(&mut deck);
        assert!(deck.passed());

        let progress = deck.record_result(&mut store).unwrap();
        assert!(progress.is_unlocked(Tier::Vocabulary));
        assert!(!progress.is_unlocked(Tier::Quotes));
        assert_eq!(progress.flashcard_stats.tier1_score, 25);
        assert_eq!(store.game_progress(), progress);
    }

    #[test]
    fn test_failing_keeps_tiers_locked() {
        let mut store = MemStorage::with_seed(1);
        let mut deck = FlashcardDeck::new(Tier::Letters, &mut seeded(4)).unwrap();
        while !deck.is_finished() {
            deck.answer("definitely wrong").unwrap();
        }
        assert!(!deck.passed());

        let progress = deck.record_result(&mut store).unwrap();
        assert_eq!(progress.unlocked_tiers, vec![1]);
        assert_eq!(deck.answer("x"), Err(FlashcardError::DeckFinished { total: 25 }));
    }

    #[test]
    fn test_options_include_answer() {
        let mut rng = seeded(12);
        let deck = FlashcardDeck::new(Tier::Vocabulary, &mut rng).unwrap();
        let options = deck.options(&mut rng).unwrap();
        let unique: HashSet<_> = options.iter().collect();
        assert_eq!(unique.len(), options.len());
        assert!(options.iter().any(|o| Some(o.as_str()) == deck.current_card()));
    }

    #[test]
    fn test_history_newest_first_and_delete() {
        let mut store = MemStorage::with_seed(9);
        let old = store.add_history_entry(history_entry("hello", "2024-01-01T10:00:00Z")).unwrap();
        let new = store.add_history_entry(history_entry("goodbye", "2024-03-01T10:00:00Z")).unwrap();

        let ids: Vec<_> = store.history().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![new.id.clone(), old.id.clone()]);

        store.delete_history_entry(&old.id).unwrap();
        assert!(matches!(store.delete_history_entry(&old.id), Err(StorageError::NotFound { .. })));
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_saved_phrases_and_settings() {
        let mut store = MemStorage::with_seed(9);
        store
            .add_saved_phrase(NewSavedPhrase {
                phrase: "may the force be with you".to_string(),
                timestamp: "2024-05-04T00:00:00Z".to_string(),
            })
            .unwrap();
        assert_eq!(store.saved_phrases().len(), 1);

        let before = store.settings();
        let err = store.update_settings(SettingsPatch { font_size: Some(99), ..SettingsPatch::default() }).unwrap_err();
        assert_eq!(err.code(), "D002");
        assert_eq!(store.settings(), before);

        let updated = store.update_settings(SettingsPatch { font_size: Some(24), ..SettingsPatch::default() }).unwrap();
        assert_eq!(updated.font_size, 24);
    }
}
