// Library API shared by the CLI and WASM builds
pub mod alphabet;
pub mod errors;
pub mod flashcards;
pub mod game;
pub mod log;
pub mod storage;
pub mod tiers;
pub mod transliterate;
pub mod word_list;
pub mod word_search;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
