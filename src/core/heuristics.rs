// src/core/heuristics.rs
//! Word-ending rewrites applied in smart mode, before tokenization.

use crate::core::special_words::SpecialWords;

/// Built-in whole-word spellings, matched exactly.
const EXCEPTION_WORDS: &[(&str, &str)] = &[
    ("cha", "chha"),
    ("chu", "chhu"),
    ("chha", "chha"),
    ("ma", "ma"),
    ("aba", "aba"),
    ("nam", "naam"),
    ("ram", "raam"),
    ("pani", "pani"),
    ("lai", "laaii"),
    ("pai", "paaii"),
    ("dai", "daaii"),
    ("bhai", "bhaaii"),
];

/// Endings left alone even though the schwa rule would otherwise fire.
const PROTECTED_ENDINGS: &[&str] = &["hha", "kna", "hna", "rna", "ndra", "ntra"];

/// Ending rules only look at words at least this long.
const MIN_RULE_CHARS: usize = 4;

/// The last four chars of a word, case-folded, last char first.
struct Ending {
    chars: [char; 4],
    folded: String,
}

impl Ending {
    fn of(word: &str) -> Self {
        let mut chars = ['\0'; 4];
        for (slot, c) in chars.iter_mut().zip(word.chars().rev()) {
            *slot = c.to_ascii_lowercase();
        }
        let folded = chars.iter().rev().filter(|&&c| c != '\0').collect();
        Self { chars, folded }
    }

    /// `back(0)` is the last char, `back(1)` the one before it, and so on.
    fn back(&self, n: usize) -> char {
        self.chars[n]
    }

    fn ends_with(&self, suffix: &str) -> bool {
        self.folded.ends_with(suffix)
    }
}

/// One ordered ending rule.
struct EndingRule {
    name: &'static str,
    applies: fn(&Ending) -> bool,
    rewrite: fn(&str, &Ending) -> String,
}

/// First match wins.
const ENDING_RULES: &[EndingRule] = &[
    EndingRule { name: "aspirate-ch", applies: ends_in_ch_vowel, rewrite: aspirate_ch },
    EndingRule { name: "final-y", applies: ends_in_y, rewrite: y_to_ree },
    EndingRule { name: "protected", applies: ends_protected, rewrite: keep },
    EndingRule { name: "restore-schwa", applies: ends_in_dropped_schwa, rewrite: append_a },
];

/// Checked on the original ending whether or not an ordered rule fired.
const LENGTHEN_FINAL_I: EndingRule = EndingRule {
    name: "lengthen-final-i",
    applies: ends_in_short_i,
    rewrite: i_to_ee,
};

fn ends_in_ch_vowel(e: &Ending) -> bool {
    matches!(e.back(0), 'a' | 'e' | 'u') && e.back(1) == 'h' && e.back(2) == 'c'
}

/// cha -> chha, chu -> chhu
fn aspirate_ch(word: &str, e: &Ending) -> String {
    format!("{}chh{}", drop_last_chars(word, 3), e.back(0))
}

fn ends_in_y(e: &Ending) -> bool {
    e.back(0) == 'y'
}

fn y_to_ree(word: &str, _: &Ending) -> String {
    format!("{}ree", drop_last_chars(word, 1))
}

fn ends_protected(e: &Ending) -> bool {
    PROTECTED_ENDINGS.iter().any(|p| e.ends_with(p))
}

fn keep(word: &str, _: &Ending) -> String {
    word.to_string()
}

fn ends_in_dropped_schwa(e: &Ending) -> bool {
    e.back(0) == 'a'
        && (e.back(1) == 'm'
            || (!is_vowel(e.back(1)) && !is_vowel(e.back(3)) && e.back(1) != 'y' && e.back(2) != 'e'))
}

fn append_a(word: &str, _: &Ending) -> String {
    format!("{word}a")
}

fn ends_in_short_i(e: &Ending) -> bool {
    e.back(0) == 'i' && !is_vowel(e.back(1))
}

fn i_to_ee(word: &str, _: &Ending) -> String {
    format!("{}ee", drop_last_chars(word, 1))
}

/// Rewrites a word toward its canonical spelling.
///
/// A caller special word matching any suffix wins outright, then the built-in
/// exception words; otherwise the ending rules run on words of four or more
/// chars.
pub fn rewrite(word: &str, special: &SpecialWords) -> String {
    if let Some((start, spelling)) = special.matching_suffix(word) {
        tracing::debug!(word, spelling, "special word");
        return format!("{}{}", &word[..start], spelling);
    }
    if let Some(&(_, spelling)) = EXCEPTION_WORDS.iter().find(|&&(w, _)| w == word) {
        return spelling.to_string();
    }
    if word.chars().count() < MIN_RULE_CHARS {
        return word.to_string();
    }

    let ending = Ending::of(word);
    let mut rewritten = match ENDING_RULES.iter().find(|rule| (rule.applies)(&ending)) {
        Some(rule) => {
            tracing::trace!(word, rule = rule.name, "ending rule");
            (rule.rewrite)(word, &ending)
        }
        None => word.to_string(),
    };
    if (LENGTHEN_FINAL_I.applies)(&ending) && rewritten.ends_with(['i', 'I']) {
        tracing::trace!(word, rule = LENGTHEN_FINAL_I.name, "ending rule");
        rewritten = (LENGTHEN_FINAL_I.rewrite)(&rewritten, &ending);
    }
    rewritten
}

/// Every `ri^` becomes `ari^`, in any mode.
pub fn fix_vocalic_ri(word: &str) -> String {
    word.replace("ri^", "ari^")
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn drop_last_chars(word: &str, n: usize) -> &str {
    let end = word.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i);
    &word[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smart(word: &str) -> String {
        rewrite(word, &SpecialWords::new())
    }

    #[test]
    fn test_exception_words() {
        assert_eq!(smart("ram"), "raam");
        assert_eq!(smart("cha"), "chha");
        assert_eq!(smart("bhai"), "bhaaii");
        assert_eq!(smart("pani"), "pani");
    }

    #[test]
    fn test_short_words_untouched() {
        assert_eq!(smart("kri"), "kri");
        assert_eq!(smart("ama"), "ama");
    }

    #[test]
    fn test_aspirated_ch() {
        assert_eq!(smart("bacha"), "bachha");
        assert_eq!(smart("pache"), "pachhe");
        assert_eq!(smart("bachu"), "bachhu");
    }

    #[test]
    fn test_final_y() {
        assert_eq!(smart("kathy"), "kathree");
    }

    #[test]
    fn test_protected_endings() {
        assert_eq!(smart("swatantra"), "swatantra");
        assert_eq!(smart("chandra"), "chandra");
        assert_eq!(smart("barna"), "barna");
        assert_eq!(smart("bahha"), "bahha");
        assert_eq!(smart("sankna"), "sankna");
        assert_eq!(smart("sinhna"), "sinhna");
    }

    #[test]
    fn test_schwa_restored() {
        assert_eq!(smart("rama"), "ramaa");
        assert_eq!(smart("kamala"), "kamalaa");
        assert_eq!(smart("sundara"), "sundaraa");
    }

    #[test]
    fn test_schwa_kept_after_y_or_vowel() {
        assert_eq!(smart("maya"), "maya");
        assert_eq!(smart("gaua"), "gaua");
    }

    #[test]
    fn test_schwa_kept_after_e_or_leading_vowel() {
        // 3rd-from-last is `e`
        assert_eq!(smart("meta"), "meta");
        // 4th-from-last is a vowel
        assert_eq!(smart("ouka"), "ouka");
    }

    #[test]
    fn test_final_i_lengthened() {
        assert_eq!(smart("kathi"), "kathee");
        assert_eq!(smart("khai"), "khai");
    }

    #[test]
    fn test_rule_order_is_case_insensitive() {
        assert_eq!(smart("BACHA"), "BAchha");
        assert_eq!(smart("KATHI"), "KATHee");
    }

    #[test]
    fn test_special_word_suffix_skips_rules() {
        let mut sw = SpecialWords::new();
        sw.insert("thi", "thi");
        assert_eq!(rewrite("kathi", &sw), "kathi");
        sw.insert("ram", "ram");
        assert_eq!(rewrite("ram", &sw), "ram");
    }

    #[test]
    fn test_fix_vocalic_ri() {
        assert_eq!(fix_vocalic_ri("patri^"), "patari^");
        assert_eq!(fix_vocalic_ri("ri^ri^"), "ari^ari^");
        assert_eq!(fix_vocalic_ri("kri"), "kri");
    }

    #[test]
    fn test_drop_last_chars() {
        assert_eq!(drop_last_chars("bacha", 3), "ba");
        assert_eq!(drop_last_chars("y", 1), "");
    }
}
