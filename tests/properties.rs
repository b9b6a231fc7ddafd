use proptest::prelude::*;
use romanised::core::tokenizer::lookup;
use romanised::core::types::Token;
use romanised::{convert, Converter, PhonemeTables};

proptest! {
    #[test]
    fn prop_convert_is_deterministic(s in "\\PC{0,24}", smart in any::<bool>()) {
        let converter = Converter::new();
        prop_assert_eq!(converter.convert(&s, smart), converter.convert(&s, smart));
    }

    #[test]
    fn prop_braces_preserve_text(s in "[^}]{0,24}", smart in any::<bool>()) {
        prop_assert_eq!(convert(&format!("{{{s}}}"), smart), s);
    }

    #[test]
    fn prop_double_escape_is_noop(s in "[^}]{0,24}") {
        let once = convert(&format!("{{{s}}}"), true);
        let twice = convert(&format!("{{{once}}}"), true);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_alternatives_concatenate(a in "[a-zA-Z]{1,8}", b in "[a-zA-Z]{1,8}", smart in any::<bool>()) {
        let joined = convert(&format!("{a}/{b}"), smart);
        prop_assert_eq!(joined, convert(&a, smart) + &convert(&b, smart));
    }

    #[test]
    fn prop_dh_never_split(rest in "[a-z]{0,6}") {
        let tables = PhonemeTables::global();
        let word = format!("dha{rest}");
        let tokens = lookup(tables, &word, false);
        match tokens.first() {
            Some(Token::Group(group)) => prop_assert!(group.starts_with("2343")),
            other => prop_assert!(false, "unexpected first token {:?}", other),
        }
    }
}
