//! English ⇄ Aurebesh substitution.
//!
//! Aurebesh is written with a private-use font: each Latin letter maps to one
//! glyph, and a handful of two-letter ligatures (`ch`, `sh`, `th`, …) map to a
//! single glyph of their own. Anything without a glyph (digits, punctuation,
//! whitespace) passes through unchanged.

use crate::alphabet::{ligature_for_glyph, ligature_glyph, AurebeshChar};

/// Transliterate English text to Aurebesh glyphs.
///
/// The text is lowercased first. At each position a ligature is preferred over
/// single letters, scanning left to right, so `"shh"` becomes `sh` + `h`.
///
/// ```
/// use aurebesh::transliterate::english_to_aurebesh;
///
/// assert_eq!(english_to_aurebesh("Hi!"), "\u{E007}\u{E008}!");
/// ```
#[must_use]
pub fn english_to_aurebesh(text: &str) -> String {
    let chars: Vec<char> = text.to_lowercase().chars().collect();
    let mut out = String::with_capacity(chars.len() * 3);
    let mut i = 0;

    while i < chars.len() {
        if let Some(glyph) = chars.get(i..i + 2).and_then(|pair| ligature_glyph(&pair.iter().collect::<String>())) {
            out.push(glyph);
            i += 2;
            continue;
        }

        let c = chars[i];
        out.push(c.to_glyph().unwrap_or(c));
        i += 1;
    }

    out
}

/// Transliterate Aurebesh glyphs back to lowercase English.
///
/// Ligature glyphs expand to their two letters; non-glyph characters are
/// lowercased and kept.
#[must_use]
pub fn aurebesh_to_english(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        if let Some(lig) = ligature_for_glyph(c) {
            out.push_str(lig);
        } else if let Some(letter) = c.from_glyph() {
            out.push(letter.to_ascii_lowercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        assert_eq!(english_to_aurebesh("abc"), "\u{E000}\u{E001}\u{E002}");
        assert_eq!(english_to_aurebesh("ABC"), "\u{E000}\u{E001}\u{E002}");
    }

    #[test]
    fn test_ligatures_preferred() {
        assert_eq!(english_to_aurebesh("the"), "\u{E018}\u{E004}");
        assert_eq!(english_to_aurebesh("Shh"), "\u{E016}\u{E007}");
        // "oon": oo ligature then n
        assert_eq!(english_to_aurebesh("moon"), "\u{E00C}\u{E015}\u{E00D}");
    }

    #[test]
    fn test_ligature_scan_is_greedy_left_to_right() {
        // "aeo": "ae" is taken first, leaving "o"
        assert_eq!(english_to_aurebesh("aeo"), "\u{E010}\u{E00E}");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(english_to_aurebesh("r2-d2 !"), "\u{E019}2-\u{E003}2 !");
        assert_eq!(english_to_aurebesh(""), "");
    }

    #[test]
    fn test_back_to_english() {
        let glyphs = english_to_aurebesh("May the Force be with you");
        assert_eq!(aurebesh_to_english(&glyphs), "may the force be with you");
    }

    #[test]
    fn test_back_to_english_lowercases_other_text() {
        assert_eq!(aurebesh_to_english("ABC \u{E018}"), "abc th");
    }

    #[test]
    fn test_ligature_boundary_at_end_of_text() {
        assert_eq!(english_to_aurebesh("c"), "\u{E002}");
        assert_eq!(english_to_aurebesh("ch"), "\u{E011}");
    }
}
