use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Category of a glyph within either script's inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphClass {
    Vowel,
    VowelSign,
    Consonant,
    Modifier,
    Digit,
}

/// One entry of the shipped mapping: a Devanagari code point and its
/// pre-composed Modi counterpart.
#[derive(Clone, Copy, Debug)]
pub struct GlyphPair {
    pub devanagari: char,
    pub modi: char,
    pub class: GlyphClass,
}

const fn pair(devanagari: char, modi: char, class: GlyphClass) -> GlyphPair {
    GlyphPair {
        devanagari,
        modi,
        class,
    }
}

/// The full shipped inventory. Both directions must stay injective; the
/// lookup initializers below panic on a duplicate key, so a bad edit here
/// fails at first use rather than silently shadowing an entry.
pub static GLYPH_TABLE: &[GlyphPair] = &[
    // Independent vowels
    pair('अ', '𑘀', GlyphClass::Vowel),
    pair('आ', '𑘁', GlyphClass::Vowel),
    pair('इ', '𑘂', GlyphClass::Vowel),
    pair('ई', '𑘃', GlyphClass::Vowel),
    pair('उ', '𑘄', GlyphClass::Vowel),
    pair('ऊ', '𑘅', GlyphClass::Vowel),
    pair('ऋ', '𑘆', GlyphClass::Vowel),
    pair('ॠ', '𑘇', GlyphClass::Vowel),
    pair('ऌ', '𑘈', GlyphClass::Vowel),
    pair('ॡ', '𑘉', GlyphClass::Vowel),
    pair('ए', '𑘊', GlyphClass::Vowel),
    pair('ऐ', '𑘋', GlyphClass::Vowel),
    pair('ओ', '𑘌', GlyphClass::Vowel),
    pair('औ', '𑘍', GlyphClass::Vowel),
    // Dependent vowel signs
    pair('ा', '𑘰', GlyphClass::VowelSign),
    pair('ि', '𑘱', GlyphClass::VowelSign),
    pair('ी', '𑘲', GlyphClass::VowelSign),
    pair('ु', '𑘳', GlyphClass::VowelSign),
    pair('ू', '𑘴', GlyphClass::VowelSign),
    pair('ृ', '𑘵', GlyphClass::VowelSign),
    pair('ॄ', '𑘶', GlyphClass::VowelSign),
    pair('ॢ', '𑘷', GlyphClass::VowelSign),
    pair('ॣ', '𑘸', GlyphClass::VowelSign),
    pair('े', '𑘹', GlyphClass::VowelSign),
    pair('ै', '𑘺', GlyphClass::VowelSign),
    pair('ो', '𑘻', GlyphClass::VowelSign),
    pair('ौ', '𑘼', GlyphClass::VowelSign),
    // Consonants
    pair('क', '𑘎', GlyphClass::Consonant),
    pair('ख', '𑘏', GlyphClass::Consonant),
    pair('ग', '𑘐', GlyphClass::Consonant),
    pair('घ', '𑘑', GlyphClass::Consonant),
    pair('ङ', '𑘒', GlyphClass::Consonant),
    pair('च', '𑘓', GlyphClass::Consonant),
    pair('छ', '𑘔', GlyphClass::Consonant),
    pair('ज', '𑘕', GlyphClass::Consonant),
    pair('झ', '𑘖', GlyphClass::Consonant),
    pair('ञ', '𑘗', GlyphClass::Consonant),
    pair('ट', '𑘘', GlyphClass::Consonant),
    pair('ठ', '𑘙', GlyphClass::Consonant),
    pair('ड', '𑘚', GlyphClass::Consonant),
    pair('ढ', '𑘛', GlyphClass::Consonant),
    pair('ण', '𑘜', GlyphClass::Consonant),
    pair('त', '𑘝', GlyphClass::Consonant),
    pair('थ', '𑘞', GlyphClass::Consonant),
    pair('द', '𑘟', GlyphClass::Consonant),
    pair('ध', '𑘠', GlyphClass::Consonant),
    pair('न', '𑘡', GlyphClass::Consonant),
    pair('प', '𑘢', GlyphClass::Consonant),
    pair('फ', '𑘣', GlyphClass::Consonant),
    pair('ब', '𑘤', GlyphClass::Consonant),
    pair('भ', '𑘥', GlyphClass::Consonant),
    pair('म', '𑘦', GlyphClass::Consonant),
    pair('य', '𑘧', GlyphClass::Consonant),
    pair('र', '𑘨', GlyphClass::Consonant),
    pair('ल', '𑘩', GlyphClass::Consonant),
    pair('व', '𑘪', GlyphClass::Consonant),
    pair('श', '𑘫', GlyphClass::Consonant),
    pair('ष', '𑘬', GlyphClass::Consonant),
    pair('स', '𑘭', GlyphClass::Consonant),
    pair('ह', '𑘮', GlyphClass::Consonant),
    // Anusvara, visarga, chandrabindu, virama
    pair('ं', '𑘽', GlyphClass::Modifier),
    pair('ः', '𑘾', GlyphClass::Modifier),
    pair('ँ', '𑙀', GlyphClass::Modifier),
    pair('्', '𑘿', GlyphClass::Modifier),
    // Digits
    pair('०', '𑙐', GlyphClass::Digit),
    pair('१', '𑙑', GlyphClass::Digit),
    pair('२', '𑙒', GlyphClass::Digit),
    pair('३', '𑙓', GlyphClass::Digit),
    pair('४', '𑙔', GlyphClass::Digit),
    pair('५', '𑙕', GlyphClass::Digit),
    pair('६', '𑙖', GlyphClass::Digit),
    pair('७', '𑙗', GlyphClass::Digit),
    pair('८', '𑙘', GlyphClass::Digit),
    pair('९', '𑙙', GlyphClass::Digit),
];

static FORWARD: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(GLYPH_TABLE.len());
    for p in GLYPH_TABLE {
        if map.insert(p.devanagari, p.modi).is_some() {
            panic!("duplicate devanagari glyph in table: {:?}", p.devanagari);
        }
    }
    map
});

static INVERSE: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(GLYPH_TABLE.len());
    for p in GLYPH_TABLE {
        if map.insert(p.modi, p.devanagari).is_some() {
            panic!("duplicate modi glyph in table: {:?}", p.modi);
        }
    }
    map
});

/// Devanagari → Modi for a single glyph. Characters without an entry pass
/// through unchanged; losing punctuation or foreign letters carried over
/// from the translation model is worse than leaving them visible.
pub fn forward(glyph: char) -> char {
    match FORWARD.get(&glyph) {
        Some(&modi) => modi,
        None => glyph,
    }
}

/// Modi → Devanagari for a single glyph, same pass-through policy.
pub fn inverse(glyph: char) -> char {
    match INVERSE.get(&glyph) {
        Some(&devanagari) => devanagari,
        None => glyph,
    }
}

/// The shipped table, for hosts that render a character-mapping view.
pub fn glyph_inventory() -> &'static [GlyphPair] {
    GLYPH_TABLE
}

pub fn is_devanagari(ch: char) -> bool {
    let u = ch as u32;
    (0x0900..=0x097F).contains(&u)
}

pub fn is_modi(ch: char) -> bool {
    let u = ch as u32;
    (0x11600..=0x1165F).contains(&u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_maps_both_ways() {
        for p in GLYPH_TABLE {
            assert_eq!(forward(p.devanagari), p.modi);
            assert_eq!(inverse(p.modi), p.devanagari);
        }
    }

    #[test]
    fn unmapped_characters_pass_through() {
        for ch in ['a', 'Z', '!', ' ', '。', '7'] {
            assert_eq!(forward(ch), ch);
            assert_eq!(inverse(ch), ch);
        }
    }

    #[test]
    fn inventory_covers_every_class() {
        assert!(GLYPH_TABLE.len() >= 40);
        for class in [
            GlyphClass::Vowel,
            GlyphClass::VowelSign,
            GlyphClass::Consonant,
            GlyphClass::Modifier,
            GlyphClass::Digit,
        ] {
            assert!(
                GLYPH_TABLE.iter().any(|p| p.class == class),
                "no entry for {class:?}"
            );
        }
        assert_eq!(
            GLYPH_TABLE
                .iter()
                .filter(|p| p.class == GlyphClass::Digit)
                .count(),
            10
        );
    }

    #[test]
    fn table_entries_stay_in_their_script_blocks() {
        for p in GLYPH_TABLE {
            assert!(is_devanagari(p.devanagari), "{:?}", p.devanagari);
            assert!(is_modi(p.modi), "{:?}", p.modi);
        }
    }
}
