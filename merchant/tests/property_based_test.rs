use merchant::{convert, to_roman, Engine};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_canonical_round_trip(n in 1u32..=3999) {
        let roman = to_roman(n).unwrap();
        prop_assert_eq!(convert(&roman).unwrap(), n);
    }

    #[test]
    fn prop_case_and_padding_insensitive(n in 1u32..=3999, pad in "[ \t]{0,3}") {
        let roman = to_roman(n).unwrap();
        let padded = format!("{}{}{}", pad, roman.to_lowercase(), pad);
        prop_assert_eq!(convert(&padded).unwrap(), n);
    }

    #[test]
    fn prop_foreign_characters_rejected(
        prefix in "[IVXLCDM]{0,3}",
        foreign in "[A-BE-HJ-KN-UWYZ0-9_+{}]",
        suffix in "[IVXLCDM]{0,3}",
    ) {
        let text = format!("{}{}{}", prefix, foreign, suffix);
        prop_assert!(convert(&text).is_err());
    }

    #[test]
    fn prop_blank_is_zero(blank in "[ \t\r\n]{0,8}") {
        prop_assert_eq!(convert(&blank).unwrap(), 0);
    }

    #[test]
    fn prop_translation_matches_symbols(n in 1u32..=3999) {
        let roman = to_roman(n).unwrap();
        let mut engine = Engine::new();
        let words: Vec<String> = roman
            .chars()
            .map(|symbol| format!("w{}", symbol.to_ascii_lowercase()))
            .collect();
        for (word, symbol) in words.iter().zip(roman.chars()) {
            engine.submit(&format!("{} is {}", word, symbol)).unwrap();
        }

        let phrase = words.join(" ");
        let answer = engine.submit(&format!("how much is {} ?", phrase)).unwrap();
        prop_assert_eq!(answer, format!("{} is {}", phrase, n));
    }

    #[test]
    fn prop_engine_never_fails_on_arbitrary_lines(line in "\\PC{0,60}") {
        let mut engine = Engine::new();
        prop_assert!(engine.submit(&line).is_ok());
    }
}
