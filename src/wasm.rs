use crate::errors::WordSearchError;
use crate::flashcards::FlashcardError;
use crate::game::WordSearchGame;
use crate::log::init_logger;
use crate::transliterate::{aurebesh_to_english, english_to_aurebesh};
use crate::word_list::WordList;
use crate::word_search::{check_match, Grid, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::{from_value, to_value};

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "W001", "F002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<WordSearchError> for WasmError {
    fn from(e: WordSearchError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<FlashcardError> for WasmError {
    fn from(e: FlashcardError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn bad_argument(name: &str, expected: &str, e: impl std::fmt::Display) -> WasmError {
    WasmError {
        code: "WASM001".to_string(),
        message: format!("{name} must be {expected}: {e}"),
        description: "Invalid argument format".to_string(),
        details: format!("The {name} parameter could not be read as {expected}."),
        help: Some("Check the value passed from JavaScript, e.g. ['JEDI', 'SITH'] or {x: 0, y: 3}".to_string()),
    }
}

fn serialization_failed(what: &str, e: impl std::fmt::Display) -> JsValue {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: "Failed to serialize result".to_string(),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();

    init_logger(debug_enabled);

    log::info!("WASM module initialized");
    if !debug_enabled {
        log::info!("Debug logging disabled");
    }
}

/// JS entry: (words: string[], size: number, seed?: number)
/// returns the grid plus where each word went and which words were skipped.
///
/// Without a seed the browser's entropy source is used.
#[wasm_bindgen]
pub fn generate_word_search_wasm(words: JsValue, size: usize, seed: Option<u64>) -> Result<JsValue, JsValue> {
    let words: Vec<String> = from_value(words).map_err(|e| bad_argument("words", "string[]", e))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = WordSearchGame::new(&words, size, &mut rng).map_err(WasmError::from)?;

    to_value(game.placement()).map_err(|e| serialization_failed("word search", e))
}

/// JS entry: (grid: Grid, start: {x, y}, end: {x, y}) returns the matched word or `undefined`.
///
/// The grid is not modified; the caller records the find.
#[wasm_bindgen]
pub fn check_match_wasm(grid: JsValue, start: JsValue, end: JsValue) -> Result<Option<String>, JsValue> {
    let grid: Grid = from_value(grid).map_err(|e| bad_argument("grid", "a word-search grid", e))?;
    if !grid.is_well_formed() {
        let msg = format!("cells are not {0}x{0}", grid.size);
        return Err(bad_argument("grid", "a square grid matching its size", msg).into());
    }
    let start: Position = from_value(start).map_err(|e| bad_argument("start", "a position", e))?;
    let end: Position = from_value(end).map_err(|e| bad_argument("end", "a position", e))?;

    Ok(check_match(&grid, start, end))
}

#[wasm_bindgen]
pub fn english_to_aurebesh_wasm(text: &str) -> String {
    english_to_aurebesh(text)
}

#[wasm_bindgen]
pub fn aurebesh_to_english_wasm(text: &str) -> String {
    aurebesh_to_english(text)
}

/// Parse a newline-separated word list (one word per line, `#` comments).
///
/// Returns the unique, uppercased words as a string array.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let list = WordList::parse_from_str(text);
    to_value(&list.words).map_err(|e| serialization_failed("word list", e))
}

/// Build a shuffled flashcard deck for tier 1, 2 or 3.
#[wasm_bindgen]
pub fn flashcard_deck_wasm(tier: u8) -> Result<JsValue, JsValue> {
    let deck = crate::flashcards::FlashcardDeck::for_tier_number(tier, &mut StdRng::from_entropy())
        .map_err(WasmError::from)?;
    to_value(deck.cards()).map_err(|e| serialization_failed("flashcard deck", e))
}

/// Puzzle section of the debug report: the inputs, and with a seed, where every
/// word lands when the puzzle is rebuilt.
fn puzzle_report(words: &[String], size: usize, seed: Option<u64>) -> String {
    use std::fmt::Write;
    let mut out = String::new();

    let _ = writeln!(out, "Grid Size: {size}");
    let _ = writeln!(out, "Words ({}): {}", words.len(), words.join(", "));

    let too_long: Vec<&str> = words
        .iter()
        .filter(|w| w.trim().chars().count() > size)
        .map(String::as_str)
        .collect();
    if !too_long.is_empty() {
        let _ = writeln!(out, "Longer than the grid: {}", too_long.join(", "));
    }

    let Some(seed) = seed else {
        let _ = writeln!(out, "Seed: none (placement can't be rebuilt)");
        return out;
    };
    let _ = writeln!(out, "Seed: {seed}");

    match WordSearchGame::new(words, size, &mut StdRng::seed_from_u64(seed)) {
        Ok(game) => {
            for p in &game.placement().placed {
                let _ = writeln!(out, "  {} {} -> {} ({:?})", p.word, p.start, p.end, p.direction);
            }
            if !game.skipped_words().is_empty() {
                let _ = writeln!(out, "Skipped: {}", game.skipped_words().join(", "));
            }
        }
        Err(e) => {
            let _ = writeln!(out, "Rebuild failed: {} ({})", e, e.code());
        }
    }

    let args: Vec<String> = words.iter().map(|w| format!("{w:?}")).collect();
    let _ = writeln!(out, "Reproduce: aurebesh word-search --seed {seed} --size {size} --solve {}", args.join(" "));
    out
}

/// Generate a debug report for troubleshooting a word search.
///
/// JS entry: (error_message: string, words: string[], size: number, seed?: number).
/// Users paste the report into an issue; with a seed it carries enough to rebuild
/// the exact grid.
#[wasm_bindgen]
pub fn get_debug_info(error_message: &str, words: JsValue, size: usize, seed: Option<u64>) -> Result<String, JsValue> {
    use std::fmt::Write;
    let words: Vec<String> = from_value(words).map_err(|e| bad_argument("words", "string[]", e))?;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== AUREBESH DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH_FULL"));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Puzzle");
    report.push_str(&puzzle_report(&words, size, seed));
    let _ = writeln!(&mut report);

    if let Some(user_agent) = web_sys::window().and_then(|w| w.navigator().user_agent().ok()) {
        let _ = writeln!(&mut report, "## Browser");
        let _ = writeln!(&mut report, "{user_agent}");
        let _ = writeln!(&mut report);
    }

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    Ok(report)
}
