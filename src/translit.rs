//! Character-for-character script conversion. Modi glyphs in the shipped
//! table are pre-composed code points, so there is no reordering or
//! combining-mark state to carry between characters.

use crate::script::{forward, inverse, is_devanagari, is_modi};

/// Render a Devanagari span in Modi script. Unmapped characters (Latin,
/// punctuation, whitespace) are kept verbatim.
pub fn transliterate_to_modi(text: &str) -> String {
    text.chars().map(forward).collect()
}

/// Render a Modi span in Devanagari, same pass-through policy.
pub fn transliterate_to_devanagari(text: &str) -> String {
    text.chars().map(inverse).collect()
}

pub fn contains_devanagari(text: &str) -> bool {
    text.chars().any(is_devanagari)
}

pub fn contains_modi(text: &str) -> bool {
    text.chars().any(is_modi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::GLYPH_TABLE;

    #[test]
    fn namaskar_renders_in_modi() {
        assert_eq!(transliterate_to_modi("नमस्कार"), "𑘡𑘦𑘭𑘿𑘎𑘰𑘨");
        assert_eq!(transliterate_to_devanagari("𑘡𑘦𑘭𑘿𑘎𑘰𑘨"), "नमस्कार");
    }

    #[test]
    fn round_trip_over_the_full_inventory() {
        let all: String = GLYPH_TABLE.iter().map(|p| p.devanagari).collect();
        assert_eq!(
            transliterate_to_devanagari(&transliterate_to_modi(&all)),
            all
        );
    }

    #[test]
    fn foreign_text_is_a_no_op() {
        let text = "Hello, world! 123";
        assert_eq!(transliterate_to_modi(text), text);
        assert_eq!(transliterate_to_devanagari(text), text);
    }

    #[test]
    fn mixed_spans_keep_unmapped_characters_in_place() {
        assert_eq!(transliterate_to_modi("क, ख."), "𑘎, 𑘏.");
        assert_eq!(transliterate_to_devanagari("𑘎, 𑘏."), "क, ख.");
    }

    #[test]
    fn span_predicates() {
        assert!(contains_devanagari("abc क"));
        assert!(!contains_devanagari("abc"));
        assert!(contains_modi("𑘎!"));
        assert!(!contains_modi("क!"));
    }
}
