// src/core/types.rs

/// Vowel sign for the long "aa", appended to a consonant written with a doubled `a`.
pub const LONG_A_SIGN: u32 = 2366;

/// Halanta: cancels a consonant's inherent vowel.
pub const SUPPRESSOR: u32 = 2381;

/// A `+`-joined run of decimal codepoints, e.g. `"2325+2381+2359"` for क्ष.
/// This is the "value" side of every phoneme table.
pub type CodepointGroup = String;

/// One unit produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'t> {
    /// A table hit, possibly with its trailing suppressor elided.
    Group(&'t str),
    /// A character with no table entry, passed through untouched.
    Literal(char),
}
