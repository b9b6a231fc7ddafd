// src/core/engine.rs
use crate::core::emitter::emit_or;
use crate::core::heuristics::{fix_vocalic_ri, rewrite};
use crate::core::masking::{segment, Segment};
use crate::core::special_words::SpecialWords;
use crate::core::tables::PhonemeTables;
use crate::core::tokenizer::lookup;
use crate::persistence::{load_special_words, save_special_words, StoreError};
use std::path::{Path, PathBuf};

/// Separates alternative spellings inside one word.
const ALTERNATIVE_SEPARATOR: char = '/';

/// Romanized text to Devanagari converter.
///
/// The phoneme tables are shared and read-only; the only per-instance state
/// is the caller's special-word table, so `convert` takes `&self` and one
/// converter can serve concurrent readers.
pub struct Converter {
    tables: &'static PhonemeTables,
    special_words: SpecialWords,
    store_path: Option<PathBuf>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::with_special_words(SpecialWords::new())
    }

    pub fn with_special_words(special_words: SpecialWords) -> Self {
        Self {
            tables: PhonemeTables::global(),
            special_words,
            store_path: None,
        }
    }

    /// Loads special words from `path`, or starts empty if it can't be read.
    /// Either way `path` becomes the save target.
    pub fn from_file_or_new(path: &Path) -> Self {
        let special_words = load_special_words(path).unwrap_or_else(|e| {
            tracing::debug!(path = %path.display(), error = %e, "starting with empty special words");
            SpecialWords::new()
        });
        let mut converter = Self::with_special_words(special_words);
        converter.store_path = Some(path.to_path_buf());
        converter
    }

    pub fn special_words(&self) -> &SpecialWords {
        &self.special_words
    }

    pub fn special_words_mut(&mut self) -> &mut SpecialWords {
        &mut self.special_words
    }

    pub fn save_special_words(&self) -> Result<(), StoreError> {
        match &self.store_path {
            Some(path) => save_special_words(&self.special_words, path),
            None => Ok(()), // Nothing to save to
        }
    }

    /// Converts `raw` to Devanagari. With `smart` on, word endings are
    /// rewritten first and `[...]` marks spans where that is switched off.
    /// `{...}` is always copied through untouched.
    pub fn convert(&self, raw: &str, smart: bool) -> String {
        let _span = tracing::debug_span!("convert", smart).entered();
        let mut output = String::with_capacity(raw.len() * 3);
        for seg in segment(raw, smart) {
            match seg {
                Segment::Text { text, smart } => self.translate_text(text, smart, &mut output),
                Segment::Literal(text) => output.push_str(text),
            }
        }
        tracing::trace!(raw, %output, "converted");
        output
    }

    /// Translates word by word, copying whitespace through.
    fn translate_text(&self, text: &str, smart: bool, output: &mut String) {
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            let len = if c.is_whitespace() {
                let len = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
                output.push_str(&rest[..len]);
                len
            } else if smart && is_sentence_mark(c) {
                self.translate_word(&rest[..1], smart, output);
                1
            } else {
                let len = rest
                    .find(|c: char| c.is_whitespace() || (smart && is_sentence_mark(c)))
                    .unwrap_or(rest.len());
                self.translate_word(&rest[..len], smart, output);
                len
            };
            rest = &rest[len..];
        }
    }

    /// Each non-empty `/`-separated alternative is translated on its own.
    fn translate_word(&self, word: &str, smart: bool, output: &mut String) {
        for alternative in word.split(ALTERNATIVE_SEPARATOR).filter(|a| !a.is_empty()) {
            output.push_str(&self.translate_alternative(alternative, smart));
        }
    }

    fn translate_alternative(&self, word: &str, smart: bool) -> String {
        let mut spelling = fix_vocalic_ri(word);
        if smart {
            spelling = rewrite(&spelling, &self.special_words);
        }
        let tokens = lookup(self.tables, &spelling, smart);
        emit_or(&tokens, word)
    }
}

/// Split off as their own words in smart mode, so the word before them still
/// gets its ending rules.
fn is_sentence_mark(c: char) -> bool {
    matches!(c, '.' | '?')
}

/// Converts with an empty special-word table.
pub fn convert(raw: &str, smart: bool) -> String {
    Converter::new().convert(raw, smart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exception_word() {
        assert_eq!(convert("ram", true), "\u{0930}\u{093E}\u{092E}"); // राम
    }

    #[test]
    fn test_plain_mode_keeps_suppressor() {
        assert_eq!(convert("ram", false), "\u{0930}\u{092E}\u{094D}"); // रम्
    }

    #[test]
    fn test_literal_braces() {
        assert_eq!(convert("{hello}", true), "hello");
        assert_eq!(convert("{hello}", false), "hello");
    }

    #[test]
    fn test_brackets_turn_heuristics_off() {
        assert_eq!(convert("[ram]", true), convert("ram", false));
        assert_ne!(convert("[ram]", true), convert("ram", true));
        assert_eq!(convert("kathi", true), "\u{0915}\u{0925}\u{0940}"); // कथी
        assert_eq!(convert("[kathi]", true), "\u{0915}\u{0925}\u{093F}"); // कथि
    }

    #[test]
    fn test_alternatives() {
        assert_eq!(convert("a/e/i", true), "\u{0905}\u{090F}\u{0907}");
        assert_eq!(convert("rama/shyam", true), convert("rama", true) + &convert("shyam", true));
        assert_eq!(convert("//", true), "");
    }

    #[test]
    fn test_whitespace_preserved() {
        // Older converters glued words together; spaces and tabs are kept here.
        let expected = format!("{} {}", convert("mero", true), convert("naam", true));
        assert_eq!(convert("mero naam", true), expected);
        assert_eq!(convert("  \t", true), "  \t");
    }

    #[test]
    fn test_sentence_marks_split_words() {
        assert_eq!(convert("ram.", true), "\u{0930}\u{093E}\u{092E}\u{0964}");
        assert_eq!(convert("ram?", true), "\u{0930}\u{093E}\u{092E}?");
    }

    #[test]
    fn test_swatantra_keeps_conjunct() {
        // स्वतन्त्र
        assert_eq!(
            convert("swatantra", true),
            "\u{0938}\u{094D}\u{0935}\u{0924}\u{0928}\u{094D}\u{0924}\u{094D}\u{0930}"
        );
    }

    #[test]
    fn test_nepal_irregular_form() {
        // नेपाल
        assert_eq!(convert("Nepal", true), "\u{0928}\u{0947}\u{092A}\u{093E}\u{0932}");
    }

    #[test]
    fn test_special_words_apply_in_smart_mode_only() {
        let mut converter = Converter::new();
        converter.special_words_mut().insert("kathi", "kaathi");
        assert_eq!(converter.convert("kathi", true), "\u{0915}\u{093E}\u{0925}\u{093F}");
        assert_eq!(converter.convert("kathi", false), "\u{0915}\u{0925}\u{093F}");
    }

    #[test]
    fn test_escaped_text_between_words() {
        assert_eq!(convert("ram {ok} ram", true), format!("{0} ok {0}", convert("ram", true)));
    }

    #[test]
    fn test_untranslatable_passthrough() {
        assert_eq!(convert("!?", false), "!?");
    }
}
