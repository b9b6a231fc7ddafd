use romanised::core::emitter::emit;
use romanised::core::tokenizer::lookup;
use romanised::{convert, Converter, PhonemeTables, SpecialWords};

/// Expected text for a spelling, built from the tables rather than literals.
fn from_tables(spelling: &str, elide_final: bool) -> String {
    emit(&lookup(PhonemeTables::global(), spelling, elide_final))
}

#[test]
fn test_ram_uses_exception_spelling() {
    assert_eq!(convert("ram", true), from_tables("raam", true));
    assert_eq!(convert("ram", true), "राम");
}

#[test]
fn test_hello_in_braces() {
    assert_eq!(convert("{hello}", true), "hello");
}

#[test]
fn test_brackets_suppress_heuristics_only_inside() {
    let mixed = convert("[kathi] kathi", true);
    let expected = format!("{} {}", from_tables("kathi", false), from_tables("kathee", true));
    assert_eq!(mixed, expected);
}

#[test]
fn test_vowel_alternatives() {
    let expected = ["a", "e", "i"].iter().map(|v| from_tables(v, true)).collect::<String>();
    assert_eq!(convert("a/e/i", true), expected);
}

#[test]
fn test_brackets_are_plain_text_without_smart() {
    assert_eq!(convert("[ka]", false), format!("[{}]", from_tables("ka", false)));
}

#[test]
fn test_literal_may_contain_table_keys_and_markers() {
    assert_eq!(convert("{ka $-1-$ [x]}", true), "ka $-1-$ [x]");
}

#[test]
fn test_sentence() {
    assert_eq!(convert("mero naam ram ho.", true), "मेरो नाम राम हो।");
}

#[test]
fn test_vocalic_ri_fix_in_both_modes() {
    for smart in [true, false] {
        assert_eq!(convert("tri^", smart), from_tables("tari^", smart));
    }
}

#[test]
fn test_digits() {
    assert_eq!(convert("2081", true), "२०८१");
}

#[test]
fn test_special_words_from_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("special_words.json");

    let mut converter = Converter::from_file_or_new(&path);
    assert!(converter.special_words().is_empty());
    converter.special_words_mut().insert("Gopal", "gopaal");
    converter.save_special_words().unwrap();

    let reloaded = Converter::from_file_or_new(&path);
    assert_eq!(reloaded.special_words().get("gopal"), Some("gopaal"));
    assert_eq!(reloaded.convert("gopal", true), from_tables("gopaal", true));
}

#[test]
fn test_converter_shared_across_threads() {
    let mut words = SpecialWords::new();
    words.insert("kathi", "kaathi");
    let converter = Converter::with_special_words(words);
    let expected = converter.convert("kathi [kathi]", true);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(converter.convert("kathi [kathi]", true), expected));
        }
    });
}
