//! Character glyphs
//!
//! Maps characters to the segments that draw them. Letters that a seven
//! segment numeral cannot draw distinctly borrow the pattern of a look-alike
//! (`B` is drawn as `8`, `O` as `0`, ...). Those aliases point at the same
//! `static` pattern.

use enumset::{EnumSet, enum_set};

use crate::segment::Segment::{self, A, B, C, D, E, F, G};

/// Set of lit segments
pub type Glyph = EnumSet<Segment>;

/// No segment lit
pub static BLANK: Glyph = EnumSet::empty();

static ZERO: Glyph = enum_set!(A | B | C | D | E | F);
static ONE: Glyph = enum_set!(B | C);
static TWO: Glyph = enum_set!(A | B | D | E | G);
static THREE: Glyph = enum_set!(A | B | C | D | G);
static FOUR: Glyph = enum_set!(B | C | F | G);
static FIVE: Glyph = enum_set!(A | C | D | F | G);
static SIX: Glyph = enum_set!(A | C | D | E | F | G);
static SEVEN: Glyph = enum_set!(A | B | C);
static EIGHT: Glyph = enum_set!(A | B | C | D | E | F | G);
static NINE: Glyph = enum_set!(A | B | C | D | F | G);
static LETTER_A: Glyph = enum_set!(A | B | C | E | F | G);
static LETTER_C: Glyph = enum_set!(A | D | E | F);
static LETTER_E: Glyph = enum_set!(A | D | E | F | G);
static LETTER_F: Glyph = enum_set!(A | E | F | G);
static LETTER_H: Glyph = enum_set!(B | C | E | F | G);
static LETTER_J: Glyph = enum_set!(B | C | D | E);
static LETTER_L: Glyph = enum_set!(D | E | F);
static LETTER_P: Glyph = enum_set!(A | B | E | F | G);
static LETTER_R: Glyph = enum_set!(A | B | C | E | F | G);
static LETTER_U: Glyph = enum_set!(B | C | D | E | F);

static GLYPHS: [(char, &Glyph); 36] = [
    ('0', &ZERO),
    ('1', &ONE),
    ('2', &TWO),
    ('3', &THREE),
    ('4', &FOUR),
    ('5', &FIVE),
    ('6', &SIX),
    ('7', &SEVEN),
    ('8', &EIGHT),
    ('9', &NINE),
    ('A', &LETTER_A),
    ('B', &EIGHT),
    ('C', &LETTER_C),
    ('D', &ZERO),
    ('E', &LETTER_E),
    ('F', &LETTER_F),
    ('G', &SIX),
    ('H', &LETTER_H),
    ('I', &ONE),
    ('J', &LETTER_J),
    ('K', &LETTER_H),
    ('L', &LETTER_L),
    ('M', &LETTER_H),
    ('N', &LETTER_H),
    ('O', &ZERO),
    ('P', &LETTER_P),
    ('Q', &ZERO),
    ('R', &LETTER_R),
    ('S', &FIVE),
    ('T', &SEVEN),
    ('U', &LETTER_U),
    ('V', &LETTER_U),
    ('W', &LETTER_U),
    ('X', &LETTER_H),
    ('Y', &FOUR),
    ('Z', &TWO),
];

/// Find the glyph of a character, ignoring case
pub fn lookup(character: char) -> Option<&'static Glyph> {
    let character = character.to_ascii_uppercase();
    GLYPHS
        .iter()
        .find(|(known, _)| *known == character)
        .map(|(_, glyph)| *glyph)
}

/// Glyph of a character, blank when the character cannot be drawn
pub fn glyph(character: char) -> &'static Glyph {
    lookup(character).unwrap_or(&BLANK)
}

/// Glyph of a string holding at most one character
///
/// The empty string and anything longer than one character are blank.
pub fn glyph_for_str(text: &str) -> &'static Glyph {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(character), None) => glyph(character),
        _ => &BLANK,
    }
}

/// Glyph of a decimal digit, blank above 9
pub fn digit(value: u8) -> &'static Glyph {
    match char::from_digit(u32::from(value), 10) {
        Some(character) => glyph(character),
        None => &BLANK,
    }
}

/// Characters with a glyph, in table order
pub fn characters() -> impl Iterator<Item = char> {
    GLYPHS.iter().map(|(character, _)| *character)
}
