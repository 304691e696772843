//! Practice content, bucketed into difficulty tiers.
//!
//! - Tier 1: single letters and the ligatures.
//! - Tier 2: vocabulary (weapons, ships, people, species, places, factions).
//! - Tier 3: quotes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::{LIGATURES, UPPERCASE_ALPHABET};

/// Tier 2 entries. The word-search game draws from the front of this list.
pub const VOCABULARY: [&str; 60] = [
    "lightsaber", "blaster", "bowcaster", "thermal detonator", "ion cannon",
    "disruptor", "electrostaff", "force pike", "comlink", "datapad",
    "x-wing", "tie fighter", "millennium falcon", "star destroyer", "tie advanced",
    "snowspeeder", "podracer", "slave i", "speeder bike", "imperial shuttle",
    "luke", "leia", "han", "chewbacca", "yoda",
    "obi wan", "anakin", "vader", "palpatine", "lando",
    "wookiee", "ewok", "rodian", "twi'lek", "zabrak",
    "mon calamari", "duros", "bothan", "kashyyykian", "jawa",
    "tatooine", "coruscant", "naboo", "hoth", "endor",
    "kamino", "geonosis", "mustafar", "dagobah", "kashyyyk",
    "rebel alliance", "galactic empire", "first order", "resistance", "jedi order",
    "sith order", "bounty hunters", "clone troopers", "stormtroopers", "droids",
];

/// Tier 3 entries; also offered as preset phrases for translation.
pub const PRESET_PHRASES: [&str; 43] = [
    "May the Force be with you",
    "I have a bad feeling about this",
    "Do. Or do not. There is no try.",
    "This is the way",
    "Use the Force, Luke.",
    "Help me, Obi-Wan Kenobi. You're my only hope.",
    "These aren't the droids you're looking for.",
    "I find your lack of faith disturbing.",
    "The Force will be with you. Always.",
    "Never tell me the odds!",
    "It's a trap!",
    "In my experience, there's no such thing as luck.",
    "Stay on target.",
    "I am your father.",
    "I will not be the last Jedi.",
    "Rebellions are built on hope.",
    "I am one with the Force. The Force is with me.",
    "I feel the good in you, the conflict.",
    "Your eyes can deceive you; don't trust them.",
    "The circle is now complete.",
    "Remember, the Force will be with you, always.",
    "Now this is podracing!",
    "You were the chosen one!",
    "I have the highground",
    "You've taken your first step into a larger world.",
    "Only a Sith deals in absolutes.",
    "Power! Unlimited power!",
    "I'm altering the deal. Pray I don't alter it any further.",
    "Why, you stuck-up, half-witted, scruffy-looking nerf herder!",
    "I suggest a new strategy, R2. Let the Wookiee win.",
    "Truly wonderful, the mind of a child is.",
    "I am a Jedi, like my father before me.",
    "You don't know the power of the dark side!",
    "Chewie, we're home.",
    "I'll never turn to the dark side.",
    "I've been waiting for you, Obi-Wan.",
    "I've got a bad feeling about this.",
    "I want to go home and rethink my life.",
    "That's no moon. It's a space station.",
    "You don't believe in the Force, do you?",
    "Mind tricks don't work on me.",
    "I'm just a simple man trying to make my way in the universe.",
    "Fear leads to anger. Anger leads to hate. Hate leads to suffering.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Letters,
    Vocabulary,
    Quotes,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Letters, Tier::Vocabulary, Tier::Quotes];

    /// Tier for a 1-based tier number.
    #[must_use]
    pub fn from_number(n: u8) -> Option<Tier> {
        match n {
            1 => Some(Tier::Letters),
            2 => Some(Tier::Vocabulary),
            3 => Some(Tier::Quotes),
            _ => None,
        }
    }

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Tier::Letters => 1,
            Tier::Vocabulary => 2,
            Tier::Quotes => 3,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tier::Letters => "Letters",
            Tier::Vocabulary => "Vocabulary",
            Tier::Quotes => "Quotes",
        }
    }

    /// The tier unlocked by passing this one.
    #[must_use]
    pub fn next(self) -> Option<Tier> {
        Tier::from_number(self.number() + 1)
    }

    /// Practice items in this tier, lowercase for letters and ligatures.
    #[must_use]
    pub fn items(self) -> Vec<String> {
        match self {
            Tier::Letters => UPPERCASE_ALPHABET
                .map(|c| c.to_ascii_lowercase().to_string())
                .chain(LIGATURES.iter().map(|(lig, _)| (*lig).to_string()))
                .collect(),
            Tier::Vocabulary => VOCABULARY.iter().map(|s| (*s).to_string()).collect(),
            Tier::Quotes => PRESET_PHRASES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {} - {}", self.number(), self.name())
    }
}

/// The first `count` vocabulary entries, as the word-search game uses them.
#[must_use]
pub fn word_search_words(count: usize) -> Vec<String> {
    VOCABULARY.iter().take(count).map(|s| (*s).to_string()).collect()
}
