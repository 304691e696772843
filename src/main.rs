use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;

use aurebesh::alphabet::AurebeshChar;
use aurebesh::errors::WordSearchError;
use aurebesh::flashcards::{FlashcardDeck, FlashcardError};
use aurebesh::game::{WordSearchConfig, WordSearchGame};
use aurebesh::tiers;
use aurebesh::transliterate::{aurebesh_to_english, english_to_aurebesh};
use aurebesh::word_list::WordList;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Aurebesh translator and practice games
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a word-search puzzle
    WordSearch(WordSearchArgs),

    /// Translate English to Aurebesh glyphs (or back with --reverse)
    Translate {
        /// Text to translate
        text: String,

        /// Treat the input as Aurebesh and print English
        #[arg(short, long)]
        reverse: bool,
    },

    /// Print a flashcard quiz with answer choices
    Flashcards {
        /// Tier to draw from (1 letters, 2 vocabulary, 3 quotes)
        #[arg(short, long, default_value_t = 1)]
        tier: u8,

        /// Seed for a reproducible deck
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct WordSearchArgs {
    /// Words to hide (defaults to the first --count vocabulary words)
    words: Vec<String>,

    /// Read words from a file, one per line
    #[arg(short = 'f', long)]
    words_file: Option<String>,

    /// Grid side length
    #[arg(short, long, default_value_t = WordSearchConfig::default().size)]
    size: usize,

    /// How many vocabulary words to use when none are given
    #[arg(short = 'c', long, default_value_t = WordSearchConfig::default().word_count)]
    count: usize,

    /// Seed for a reproducible grid
    #[arg(long)]
    seed: Option<u64>,

    /// Print the grid as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Render grid letters as Aurebesh glyphs
    #[arg(short, long)]
    glyphs: bool,

    /// Also print where each word was placed
    #[arg(long)]
    solve: bool,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Entry point of the Aurebesh CLI.
///
/// Delegates to [`try_main`], printing any error with its code before exiting with code 1.
fn main() -> ExitCode {
    aurebesh::log::init_logger(aurebesh::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(ws_err) = e.downcast_ref::<WordSearchError>() {
            eprintln!("Error: {}", ws_err.display_detailed());
        } else if let Some(fc_err) = e.downcast_ref::<FlashcardError>() {
            eprintln!("Error: {}", fc_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::WordSearch(args) => word_search(&args),
        Command::Translate { text, reverse } => {
            if reverse {
                println!("{}", aurebesh_to_english(&text));
            } else {
                println!("{}", english_to_aurebesh(&text));
            }
            Ok(())
        }
        Command::Flashcards { tier, seed } => flashcards(tier, seed),
    }
}

fn word_search(args: &WordSearchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let words = if let Some(path) = &args.words_file {
        WordList::load_from_path(path)?.words
    } else if args.words.is_empty() {
        tiers::word_search_words(args.count)
    } else {
        args.words.clone()
    };

    let mut rng = make_rng(args.seed);
    let t_gen = Instant::now();
    let game = WordSearchGame::new(&words, args.size, &mut rng)?;
    let gen_secs = t_gen.elapsed().as_secs_f64();

    if args.json {
        println!("{}", serde_json::to_string_pretty(game.placement())?);
    } else {
        let grid = game.grid();
        if args.glyphs {
            for row in &grid.cells {
                let line: Vec<String> = row
                    .iter()
                    .filter_map(|c| c.letter)
                    .map(|l| l.to_glyph().unwrap_or(l).to_string())
                    .collect();
                println!("{}", line.join(" "));
            }
        } else {
            print!("{grid}");
        }
        println!();
        println!("Find: {}", grid.words_to_find.join(", "));

        if args.solve {
            for p in &game.placement().placed {
                println!("  {} {} -> {} ({:?})", p.word, p.start, p.end, p.direction);
            }
        }
    }

    for word in game.skipped_words() {
        eprintln!("⚠️  Could not place {word}; it can't be found in this grid");
    }
    eprintln!("Generated {}x{} grid with {} words in {:.3}s.", args.size, args.size, words.len(), gen_secs);

    Ok(())
}

fn flashcards(tier: u8, seed: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = make_rng(seed);
    let mut deck = FlashcardDeck::for_tier_number(tier, &mut rng)?;
    println!("{} ({} cards, {} to pass)", deck.tier(), deck.len(), deck.required_score());

    let mut n = 1;
    while let Some(prompt) = deck.prompt() {
        let options = deck.options(&mut rng)?;
        println!("{n:>2}. {prompt}");
        for (letter, option) in ('a'..).zip(&options) {
            println!("      {letter}) {option}");
        }
        let answer = deck.current_card().unwrap_or_default().to_string();
        deck.answer(&answer)?;
        println!("      answer: {answer}");
        n += 1;
    }

    Ok(())
}
