//! 통합 테스트 - 라틴 <-> 그리스 단어 변환

use transliterate::config::{Direction, TranslitConfig};
use transliterate::core::diacritic::{compose, decompose};
use transliterate::{convert_text, greek_to_latin, latin_to_greek, segment, Token};

#[test]
fn test_final_sigma() {
    let greek = latin_to_greek("logos", true, false).unwrap();
    assert!(greek.ends_with('ς'));
    assert!(!greek.ends_with('σ'));
}

#[test]
fn test_smooth_breathing_on_first_letter() {
    assert_eq!(latin_to_greek("aner", true, false).unwrap(), "ἀνερ");
}

#[test]
fn test_rough_breathing_from_leading_h() {
    let greek = latin_to_greek("hippos", true, false).unwrap();
    assert_eq!(greek, "ἱππος");
    assert!(!greek.contains('h'));
}

#[test]
fn test_invalid_letter() {
    let err = latin_to_greek("java", true, false).unwrap_err();
    assert_eq!(err.letter, "j");
    assert_eq!(err.to_string(), "Invalid input: j in java.");
}

#[test]
fn test_latinize_chi() {
    let latin = greek_to_latin("χορος", true, false);
    assert_eq!(latin, "choros");
    assert!(!latin.contains("kh"));
}

#[test]
fn test_rough_breathing_inserts_h() {
    assert_eq!(greek_to_latin("ἅγιος", true, false), "hágios");
}

#[test]
fn test_nasal_assimilation() {
    let latin = greek_to_latin("ἄγγελος", true, false);
    assert!(latin.contains("ng"));
    assert!(!latin.contains("gg"));
}

#[test]
fn test_base_letters_survive_round_trip() {
    for word in ["logos", "kosmos", "polis", "dēmos", "psōmos", "nomos", "stratēgos"] {
        let greek = latin_to_greek(word, true, false).unwrap();
        assert_eq!(greek_to_latin(&greek, false, false), word, "{word} -> {greek}");
    }
}

#[test]
fn test_round_trip_through_aspirates() {
    // 라틴 철자 h는 ʰ로 돌아옴
    let greek = latin_to_greek("philosophia", true, false).unwrap();
    assert_eq!(greek, "φιλοσοφια");
    assert_eq!(greek_to_latin(&greek, false, false), "pʰilosopʰia");
    assert_eq!(greek_to_latin(&greek, true, false), "philosophia");
}

#[test]
fn test_decompose_compose_identity() {
    for c in "ἀἁἄἅᾄᾅῥῤῶᾷΆὍáàāăǎâãäēōŭ".chars() {
        let (base, diacritics) = decompose(c);
        assert_eq!(compose(&base.to_string(), &diacritics), c.to_string());
    }
}

#[test]
fn test_breve_never_with_macron() {
    use unicode_normalization::UnicodeNormalization;

    let greek = latin_to_greek("hēmera", true, true).unwrap();
    let latin = greek_to_latin(&greek, true, true);
    for c in latin.chars() {
        let marks: Vec<char> = c.to_string().nfd().skip(1).collect();
        assert!(
            !(marks.contains(&'\u{0304}') && marks.contains(&'\u{0306}')),
            "{latin}"
        );
    }
}

#[test]
fn test_sentence_latin_to_greek() {
    let config = TranslitConfig::default();
    assert_eq!(
        convert_text("en arkhē ēn ho logos.", &config),
        "ἐν ἀρχη ἠν ὁ λογος."
    );
}

#[test]
fn test_sentence_greek_to_latin() {
    let config = TranslitConfig {
        direction: Direction::GreekToLatin,
        latinize: true,
        ..TranslitConfig::default()
    };
    assert_eq!(
        convert_text("ἐν ἀρχῇ ἦν ὁ λόγος.", &config),
        "en archē\u{0303}i ē\u{0303}n ho lógos."
    );
}

#[test]
fn test_segment_keeps_separators() {
    let tokens = segment("ὁ λόγος·");
    assert_eq!(
        tokens,
        vec![
            Token::Word("ὁ"),
            Token::Separator(' '),
            Token::Word("λόγος"),
            Token::Separator('·'),
        ]
    );
}
