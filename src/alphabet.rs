use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';
#[cfg(test)]
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';

pub(crate) const FILL_LETTERS: &[u8; ALPHABET_SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Private-use code points of the Aurebesh font, indexed by `letter - 'A'`.
///
/// The font skips some slots (U+E010..U+E016 and U+E018 are ligatures), so
/// Q onwards are not contiguous with P.
const LETTER_GLYPHS: [char; ALPHABET_SIZE] = [
    '\u{E000}', '\u{E001}', '\u{E002}', '\u{E003}', '\u{E004}', '\u{E005}', '\u{E006}',
    '\u{E007}', '\u{E008}', '\u{E009}', '\u{E00A}', '\u{E00B}', '\u{E00C}', '\u{E00D}',
    '\u{E00E}', '\u{E00F}', '\u{E017}', '\u{E019}', '\u{E01A}', '\u{E01B}', '\u{E01C}',
    '\u{E01D}', '\u{E01E}', '\u{E01F}', '\u{E020}', '\u{E021}',
];

/// Two-letter sequences rendered as a single glyph, in lookup order.
pub const LIGATURES: [(&str, char); 8] = [
    ("ch", '\u{E011}'),
    ("sh", '\u{E016}'),
    ("th", '\u{E018}'),
    ("ae", '\u{E010}'),
    ("eo", '\u{E012}'),
    ("kh", '\u{E013}'),
    ("oo", '\u{E015}'),
    ("ng", '\u{E014}'),
];

static GLYPH_TO_LETTER: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    UPPERCASE_ALPHABET
        .zip(LETTER_GLYPHS)
        .map(|(letter, glyph)| (glyph, letter))
        .collect()
});

static GLYPH_TO_LIGATURE: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| LIGATURES.iter().map(|&(lig, glyph)| (glyph, lig)).collect());

/// Glyph for a two-letter lowercase ligature, if it has one.
#[must_use]
pub fn ligature_glyph(pair: &str) -> Option<char> {
    LIGATURES.iter().find(|(lig, _)| *lig == pair).map(|&(_, glyph)| glyph)
}

/// Ligature spelled by `glyph`, if it is a ligature glyph.
#[must_use]
pub fn ligature_for_glyph(glyph: char) -> Option<&'static str> {
    GLYPH_TO_LIGATURE.get(&glyph).copied()
}

pub trait AurebeshChar {
    /// Glyph for a Latin letter (either case).
    fn to_glyph(&self) -> Option<char>;
    /// Uppercase Latin letter for a letter glyph.
    fn from_glyph(&self) -> Option<char>;
    fn is_glyph(&self) -> bool;
}

impl AurebeshChar for char {
    fn to_glyph(&self) -> Option<char> {
        let upper = self.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(LETTER_GLYPHS[(upper as u8 - b'A') as usize])
        } else {
            None
        }
    }
    fn from_glyph(&self) -> Option<char> {
        GLYPH_TO_LETTER.get(self).copied()
    }
    fn is_glyph(&self) -> bool {
        GLYPH_TO_LETTER.contains_key(self) || GLYPH_TO_LIGATURE.contains_key(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_to_glyph_is_case_insensitive() {
        assert_eq!('a'.to_glyph(), Some('\u{E000}'));
        assert_eq!('A'.to_glyph(), Some('\u{E000}'));
        assert_eq!('z'.to_glyph(), Some('\u{E021}'));
    }

    #[test]
    fn test_glyph_gap_after_p() {
        assert_eq!('P'.to_glyph(), Some('\u{E00F}'));
        assert_eq!('Q'.to_glyph(), Some('\u{E017}'));
        assert_eq!('R'.to_glyph(), Some('\u{E019}'));
    }

    #[test]
    fn test_non_letters_have_no_glyph() {
        assert_eq!('1'.to_glyph(), None);
        assert_eq!(' '.to_glyph(), None);
        assert_eq!('é'.to_glyph(), None);
    }

    #[test]
    fn test_from_glyph_inverts_to_glyph() {
        for c in UPPERCASE_ALPHABET {
            let glyph = c.to_glyph().unwrap();
            assert_eq!(glyph.from_glyph(), Some(c));
        }
        for c in LOWERCASE_ALPHABET {
            let glyph = c.to_glyph().unwrap();
            assert_eq!(glyph.from_glyph(), Some(c.to_ascii_uppercase()));
        }
    }

    #[test]
    fn test_all_glyphs_are_distinct() {
        let mut seen = HashSet::new();
        for c in UPPERCASE_ALPHABET {
            assert!(seen.insert(c.to_glyph().unwrap()), "duplicate glyph for '{c}'");
        }
        for (lig, glyph) in LIGATURES {
            assert!(seen.insert(glyph), "ligature '{lig}' reuses a letter glyph");
        }
        assert_eq!(seen.len(), ALPHABET_SIZE + LIGATURES.len());
    }

    #[test]
    fn test_ligature_lookup() {
        assert_eq!(ligature_glyph("th"), Some('\u{E018}'));
        assert_eq!(ligature_glyph("TH"), None);
        assert_eq!(ligature_glyph("xy"), None);
        assert_eq!(ligature_for_glyph('\u{E014}'), Some("ng"));
        assert_eq!(ligature_for_glyph('\u{E000}'), None);
    }

    #[test]
    fn test_is_glyph() {
        assert!('\u{E000}'.is_glyph());
        assert!('\u{E016}'.is_glyph());
        assert!(!'a'.is_glyph());
        assert!(!'\u{E0FF}'.is_glyph());
    }

    #[test]
    fn test_fill_letters_cover_alphabet() {
        let letters: Vec<char> = FILL_LETTERS.iter().map(|&b| b as char).collect();
        assert_eq!(letters, UPPERCASE_ALPHABET.collect::<Vec<_>>());
    }
}
