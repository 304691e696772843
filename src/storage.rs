//! Persistence for translation history, saved phrases, game progress and settings.
//!
//! The [`Storage`] trait is the seam between callers (HTTP handlers, the WASM
//! front end, tests) and whatever keeps the records. [`MemStorage`] is the
//! in-memory implementation; it is a plain value owned by whoever serves
//! requests, so there is no process-wide store.
//!
//! Records serialize with camelCase field names (`fontSize`, `unlockedTiers`,
//! `tier1Score`, …) so they can be handed to a JSON API unchanged.
//!
//! # Error Codes
//!
//! - D001: `NotFound` (No record with that id)
//! - D002: `InvalidFontSize` (Font size outside 16-32)
//! - D003: `InvalidTier` (Tier number outside 1-3)
//! - D004: `InvalidRecord` (Record failed validation)

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::errors::format_error_with_code_and_help;
use crate::tiers::Tier;

pub const MIN_FONT_SIZE: u8 = 16;
pub const MAX_FONT_SIZE: u8 = 32;
pub const DEFAULT_FONT_SIZE: u8 = 20;

/// Id of the single progress and settings records.
const SINGLETON_ID: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub english: String,
    pub aurebesh: String,
    #[serde(default)]
    pub favorite: bool,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHistoryEntry {
    pub english: String,
    pub aurebesh: String,
    #[serde(default)]
    pub favorite: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryPatch {
    pub english: Option<String>,
    pub aurebesh: Option<String>,
    pub favorite: Option<bool>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPhrase {
    pub id: String,
    pub phrase: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedPhrase {
    pub phrase: String,
    pub timestamp: String,
}

/// Best flashcard score per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlashcardStats {
    pub tier1_score: u32,
    pub tier2_score: u32,
    pub tier3_score: u32,
}

impl FlashcardStats {
    #[must_use]
    pub fn score(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Letters => self.tier1_score,
            Tier::Vocabulary => self.tier2_score,
            Tier::Quotes => self.tier3_score,
        }
    }

    pub fn score_mut(&mut self, tier: Tier) -> &mut u32 {
        match tier {
            Tier::Letters => &mut self.tier1_score,
            Tier::Vocabulary => &mut self.tier2_score,
            Tier::Quotes => &mut self.tier3_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProgress {
    pub id: String,
    /// 1-based tier numbers.
    pub unlocked_tiers: Vec<u8>,
    #[serde(default)]
    pub flashcard_stats: FlashcardStats,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            id: SINGLETON_ID.to_string(),
            unlocked_tiers: vec![Tier::Letters.number()],
            flashcard_stats: FlashcardStats::default(),
        }
    }
}

impl GameProgress {
    #[must_use]
    pub fn is_unlocked(&self, tier: Tier) -> bool {
        self.unlocked_tiers.contains(&tier.number())
    }

    /// Highest unlocked tier, falling back to tier 1.
    #[must_use]
    pub fn highest_unlocked(&self) -> Tier {
        self.unlocked_tiers
            .iter()
            .filter_map(|&n| Tier::from_number(n))
            .max()
            .unwrap_or(Tier::Letters)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProgressPatch {
    pub unlocked_tiers: Option<Vec<u8>>,
    pub flashcard_stats: Option<FlashcardStats>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Rebel,
    Imperial,
    #[serde(rename = "Light Side")]
    LightSide,
    #[serde(rename = "Dark Side")]
    DarkSide,
    #[serde(rename = "Bounty Hunter")]
    BountyHunter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: String,
    pub theme: Theme,
    pub font_size: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self { id: SINGLETON_ID.to_string(), theme: Theme::default(), font_size: DEFAULT_FONT_SIZE }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub font_size: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    HistoryEntry,
    SavedPhrase,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RecordKind::HistoryEntry => "History entry",
            RecordKind::SavedPhrase => "Saved phrase",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    #[error("Font size {font_size} out of range 16-32")]
    InvalidFontSize { font_size: u8 },

    #[error("Unknown tier {tier}")]
    InvalidTier { tier: u8 },

    #[error("Invalid record: {reason}")]
    InvalidRecord { reason: String },
}

impl StorageError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::NotFound { .. } => "D001",
            StorageError::InvalidFontSize { .. } => "D002",
            StorageError::InvalidTier { .. } => "D003",
            StorageError::InvalidRecord { .. } => "D004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            StorageError::NotFound { .. } => "No record with that id",
            StorageError::InvalidFontSize { .. } => "Font size outside 16-32",
            StorageError::InvalidTier { .. } => "Tier number outside 1-3",
            StorageError::InvalidRecord { .. } => "Record failed validation",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            StorageError::NotFound { .. } => "The id does not match any stored record. It may have been deleted already.",
            StorageError::InvalidFontSize { .. } => "Settings updates must keep the font size within the supported range. The update was not applied.",
            StorageError::InvalidTier { .. } => "Unlocked tiers are the tier numbers 1 (letters), 2 (vocabulary) and 3 (quotes). The update was not applied.",
            StorageError::InvalidRecord { .. } => "A new or updated record is missing a required value or has a malformed timestamp. Nothing was stored.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            StorageError::NotFound { .. } => Some("List the records first to get a current id"),
            StorageError::InvalidFontSize { .. } => Some("Pick a font size between 16 and 32, e.g. 20"),
            StorageError::InvalidTier { .. } => Some("Use tier numbers 1, 2 or 3"),
            StorageError::InvalidRecord { .. } => Some("Timestamps must be RFC 3339, e.g. 2024-05-04T12:00:00Z or 2024-05-04T17:30:00+05:30"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Record store used by the translator and the practice games.
///
/// Lists come back newest first.
pub trait Storage {
    fn history(&self) -> Vec<HistoryEntry>;
    fn add_history_entry(&mut self, entry: NewHistoryEntry) -> Result<HistoryEntry, StorageError>;
    fn update_history_entry(&mut self, id: &str, patch: HistoryEntryPatch) -> Result<HistoryEntry, StorageError>;
    fn delete_history_entry(&mut self, id: &str) -> Result<(), StorageError>;

    fn saved_phrases(&self) -> Vec<SavedPhrase>;
    fn add_saved_phrase(&mut self, phrase: NewSavedPhrase) -> Result<SavedPhrase, StorageError>;
    fn delete_saved_phrase(&mut self, id: &str) -> Result<(), StorageError>;

    fn game_progress(&self) -> GameProgress;
    fn update_game_progress(&mut self, patch: GameProgressPatch) -> Result<GameProgress, StorageError>;

    fn settings(&self) -> Settings;
    fn update_settings(&mut self, patch: SettingsPatch) -> Result<Settings, StorageError>;
}

/// In-memory [`Storage`]. Ids are random v4-style UUID strings.
#[derive(Debug, Clone)]
pub struct MemStorage {
    history: HashMap<String, HistoryEntry>,
    saved_phrases: HashMap<String, SavedPhrase>,
    game_progress: GameProgress,
    settings: Settings,
    rng: StdRng,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl MemStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose generated ids are reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            history: HashMap::new(),
            saved_phrases: HashMap::new(),
            game_progress: GameProgress::default(),
            settings: Settings::default(),
            rng,
        }
    }

    fn new_id(&mut self) -> String {
        let mut bytes: [u8; 16] = self.rng.gen();
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        format!("{}-{}-{}-{}-{}", &hex[0..8], &hex[8..12], &hex[12..16], &hex[16..20], &hex[20..32])
    }
}

/// Parse an RFC 3339 timestamp, rejecting blanks and anything unparseable.
fn parse_timestamp(timestamp: &str) -> Result<DateTime<FixedOffset>, StorageError> {
    if timestamp.trim().is_empty() {
        return Err(StorageError::InvalidRecord { reason: "timestamp is required".to_string() });
    }
    DateTime::parse_from_rfc3339(timestamp.trim()).map_err(|e| StorageError::InvalidRecord {
        reason: format!("timestamp '{timestamp}' is not RFC 3339: {e}"),
    })
}

/// Records ordered by instant, newest first; ties broken by id.
///
/// Offsets are honoured, so `10:00+05:00` sorts before `06:00Z`.
fn newest_first<T: Clone>(records: &HashMap<String, T>, key: impl Fn(&T) -> (&str, &str)) -> Vec<T> {
    let mut keyed: Vec<(Option<DateTime<FixedOffset>>, &str, &T)> = records
        .values()
        .map(|r| {
            let (timestamp, id) = key(r);
            (parse_timestamp(timestamp).ok(), id, r)
        })
        .collect();
    keyed.sort_by(|a, b| (b.0, b.1).cmp(&(a.0, a.1)));
    keyed.into_iter().map(|(_, _, r)| r.clone()).collect()
}

impl Storage for MemStorage {
    fn history(&self) -> Vec<HistoryEntry> {
        newest_first(&self.history, |e| (e.timestamp.as_str(), e.id.as_str()))
    }

    fn add_history_entry(&mut self, entry: NewHistoryEntry) -> Result<HistoryEntry, StorageError> {
        parse_timestamp(&entry.timestamp)?;
        let id = self.new_id();
        let full = HistoryEntry {
            id: id.clone(),
            english: entry.english,
            aurebesh: entry.aurebesh,
            favorite: entry.favorite,
            timestamp: entry.timestamp,
        };
        self.history.insert(id, full.clone());
        debug!("Added history entry {}", full.id);
        Ok(full)
    }

    fn update_history_entry(&mut self, id: &str, patch: HistoryEntryPatch) -> Result<HistoryEntry, StorageError> {
        if let Some(timestamp) = &patch.timestamp {
            parse_timestamp(timestamp)?;
        }
        let entry = self
            .history
            .get_mut(id)
            .ok_or_else(|| StorageError::NotFound { kind: RecordKind::HistoryEntry, id: id.to_string() })?;

        if let Some(english) = patch.english {
            entry.english = english;
        }
        if let Some(aurebesh) = patch.aurebesh {
            entry.aurebesh = aurebesh;
        }
        if let Some(favorite) = patch.favorite {
            entry.favorite = favorite;
        }
        if let Some(timestamp) = patch.timestamp {
            entry.timestamp = timestamp;
        }
        Ok(entry.clone())
    }

    fn delete_history_entry(&mut self, id: &str) -> Result<(), StorageError> {
        self.history
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound { kind: RecordKind::HistoryEntry, id: id.to_string() })
    }

    fn saved_phrases(&self) -> Vec<SavedPhrase> {
        newest_first(&self.saved_phrases, |p| (p.timestamp.as_str(), p.id.as_str()))
    }

    fn add_saved_phrase(&mut self, phrase: NewSavedPhrase) -> Result<SavedPhrase, StorageError> {
        parse_timestamp(&phrase.timestamp)?;
        let id = self.new_id();
        let full = SavedPhrase { id: id.clone(), phrase: phrase.phrase, timestamp: phrase.timestamp };
        self.saved_phrases.insert(id, full.clone());
        debug!("Saved phrase {}", full.id);
        Ok(full)
    }

    fn delete_saved_phrase(&mut self, id: &str) -> Result<(), StorageError> {
        self.saved_phrases
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound { kind: RecordKind::SavedPhrase, id: id.to_string() })
    }

    fn game_progress(&self) -> GameProgress {
        self.game_progress.clone()
    }

    fn update_game_progress(&mut self, patch: GameProgressPatch) -> Result<GameProgress, StorageError> {
        if let Some(tiers) = &patch.unlocked_tiers {
            if let Some(&tier) = tiers.iter().find(|&&t| Tier::from_number(t).is_none()) {
                return Err(StorageError::InvalidTier { tier });
            }
        }

        if let Some(tiers) = patch.unlocked_tiers {
            self.game_progress.unlocked_tiers = tiers;
        }
        if let Some(stats) = patch.flashcard_stats {
            self.game_progress.flashcard_stats = stats;
        }
        Ok(self.game_progress.clone())
    }

    fn settings(&self) -> Settings {
        self.settings.clone()
    }

    fn update_settings(&mut self, patch: SettingsPatch) -> Result<Settings, StorageError> {
        if let Some(font_size) = patch.font_size {
            if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&font_size) {
                return Err(StorageError::InvalidFontSize { font_size });
            }
            self.settings.font_size = font_size;
        }
        if let Some(theme) = patch.theme {
            self.settings.theme = theme;
        }
        Ok(self.settings.clone())
    }
}
