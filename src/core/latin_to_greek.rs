//! 라틴 문자 -> 그리스 문자 변환기

use std::fmt;

use crate::core::diacritic::{compose, decompose, Diacritic, Diacritics};
use crate::core::grapheme::Grapheme;
use crate::core::letter_map::{self, is_aspirated, is_glide, is_latin_vowel, ASPIRATION};

/// 유기음 표시를 붙일 수 있는 철자
const ASPIRATED_STOPS: [&str; 5] = ["pʰ", "tʰ", "kʰ", "cʰ", "rʰ"];

/// 그리스 문자로 옮길 수 없는 라틴 글자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLetterError {
    /// 문제된 철자 (예: "j", "bʰ")
    pub letter: String,
    /// 입력 단어 전체
    pub word: String,
}

impl fmt::Display for InvalidLetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid input: {} in {}.", self.letter, self.word)
    }
}

impl std::error::Error for InvalidLetterError {}

/// 토큰화된 라틴 단어
struct LatinWord {
    graphemes: Vec<Grapheme>,
    /// 어두 h가 있었는지 (강기식으로 변환)
    rough: bool,
}

/// 라틴 단어를 글자 단위로 분해
///
/// - 단독 결합 기호는 직전 글자에 붙음
/// - ʰ, 어중 h는 직전 글자의 유기음 표시가 됨
/// - 어두 h는 글자를 만들지 않고 강기식 플래그만 설정
/// - dz -> z, ps/ks는 한 글자로 합침
fn tokenize(word: &str) -> LatinWord {
    let mut graphemes: Vec<Grapheme> = Vec::new();
    let mut rough = false;

    for (i, c) in word.chars().enumerate() {
        if Diacritic::from_char(c).is_some() {
            if let Some(prev) = graphemes.last_mut() {
                prev.diacritics.push_raw(c);
                continue;
            }
        }

        if c == ASPIRATION {
            if let Some(prev) = graphemes.last_mut() {
                prev.letter.push(ASPIRATION);
                continue;
            }
        }

        let (base, diacritics) = decompose(c);
        let capital = base.is_ascii_uppercase();
        let base = base.to_ascii_lowercase();

        if base == 'h' {
            if i == 0 {
                rough = true;
            } else if let Some(prev) = graphemes.last_mut() {
                prev.letter.push(ASPIRATION);
            }
            continue;
        }

        let merged = match graphemes.last_mut() {
            Some(prev) if base == 'z' && prev.letter == "d" => {
                prev.letter = String::from("z");
                true
            }
            Some(prev) if base == 's' && (prev.letter == "p" || prev.letter == "k") => {
                prev.letter.push('s');
                true
            }
            _ => false,
        };

        if !merged {
            graphemes.push(Grapheme::new(base, diacritics, capital));
        }
    }

    LatinWord { graphemes, rough }
}

/// 기식 기호를 받을 글자 위치
///
/// 어두 모음 + i/y/u가 이중모음을 이루면 두 번째 글자,
/// 그렇지 않고 첫 글자가 모음이면 첫 글자, 자음으로 시작하면 None.
/// 두 번째 글자의 분음 기호(ï)는 이중모음이 아니라 모음 분리를 뜻함.
fn breathing_position(graphemes: &[Grapheme]) -> Option<usize> {
    let first = graphemes.first()?;
    if !is_latin_vowel(&first.letter) {
        return None;
    }

    if let Some(second) = graphemes.get(1) {
        let both_upsilon = matches!(first.letter.as_str(), "y" | "u")
            && matches!(second.letter.as_str(), "y" | "u");
        if is_glide(&second.letter)
            && first.letter != second.letter
            && !both_upsilon
            && !second.diacritics.contains(Diacritic::Umlaut)
        {
            return Some(1);
        }
    }

    Some(0)
}

fn is_invalid_letter(letter: &str) -> bool {
    matches!(letter, "j" | "q" | "v")
        || (is_aspirated(letter) && !ASPIRATED_STOPS.contains(&letter))
}

/// 라틴 단어 하나를 그리스 문자로 변환
///
/// - `treat_as_word`: 어두 모음에 약기식, 어말 σ를 ς로
/// - `add_breve`: 짧은 모음에 단음 기호 추가
///
/// j, q, v 또는 p/t/k/c/r 이외의 글자에 붙은 유기음 표시는 `InvalidLetterError`.
pub fn latin_to_greek(
    word: &str,
    treat_as_word: bool,
    add_breve: bool,
) -> Result<String, InvalidLetterError> {
    let LatinWord { mut graphemes, rough } = tokenize(word);

    // 대문자 H는 다음 글자의 대문자로 옮겨감
    if word.starts_with('H') {
        if let Some(first) = graphemes.first_mut() {
            first.capital = true;
        }
    }

    let breathing = if rough {
        Some(Diacritic::Rough)
    } else if treat_as_word {
        Some(Diacritic::Smooth)
    } else {
        None
    };
    let breathing_at = breathing_position(&graphemes);
    let last = graphemes.len().saturating_sub(1);

    let mut output: Vec<Grapheme> = Vec::with_capacity(graphemes.len());

    for (i, grapheme) in graphemes.iter().enumerate() {
        let Grapheme {
            mut letter,
            mut diacritics,
            capital,
        } = grapheme.clone();

        if is_invalid_letter(&letter) {
            log::debug!("변환 불가 글자: {} ({})", letter, word);
            return Err(InvalidLetterError {
                letter,
                word: word.to_string(),
            });
        }

        if letter == "rʰ" {
            letter = String::from("r");
            diacritics.prepend(Diacritic::Rough);
            // ῤῥ: 앞의 ρ는 약기식으로 다시 씀
            if i > 0 && graphemes[i - 1].letter == "r" {
                let prev_capital = output[i - 1].capital;
                output[i - 1] =
                    Grapheme::new("ρ", Diacritics::single(Diacritic::Smooth), prev_capital);
            }
        }

        // 본래 긴 ē, ō (ẽ, õ 포함)
        if (letter == "e" || letter == "o")
            && (diacritics.contains(Diacritic::Macron) || diacritics.contains(Diacritic::Tilde))
        {
            letter = compose(&letter, &Diacritics::single(Diacritic::Macron));
            diacritics.remove_all(Diacritic::Macron);
        }

        let Some(greek) = letter_map::latin_to_greek(&letter) else {
            output.push(Grapheme::new(letter, diacritics, capital));
            continue;
        };

        if breathing_at == Some(i) {
            if let Some(mark) = breathing {
                diacritics.prepend(mark);
            }
        }

        diacritics.replace(Diacritic::Tilde, Diacritic::GreekTilde);

        let greek = if treat_as_word && i == last && !capital && greek == "σ" {
            "ς"
        } else {
            greek
        };

        diacritics.move_to_front(Diacritic::Macron);

        let short = letter == "e"
            || letter == "o"
            || (matches!(letter.as_str(), "a" | "i" | "y" | "u")
                && !diacritics.contains(Diacritic::Macron));
        if add_breve && short {
            diacritics.prepend(Diacritic::Breve);
        }

        output.push(Grapheme::new(greek, diacritics, capital));
    }

    let result: String = output.iter().map(Grapheme::render).collect();
    log::debug!("라틴→그리스: {} -> {}", word, result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lg(word: &str) -> String {
        latin_to_greek(word, true, false).unwrap()
    }

    #[test]
    fn test_basic_conversion() {
        assert_eq!(lg("logos"), "λογος");
        assert_eq!(lg("kosmos"), "κοσμος");
        assert_eq!(lg("polis"), "πολις");
    }

    #[test]
    fn test_final_sigma() {
        assert!(lg("logos").ends_with('ς'));
        assert_eq!(latin_to_greek("logos", false, false).unwrap(), "λογοσ");
        // 어중 σ는 그대로
        assert_eq!(lg("kosmos"), "κοσμος");
    }

    #[test]
    fn test_smooth_breathing() {
        assert_eq!(lg("aner"), "ἀνερ");
        assert_eq!(lg("ōkeanos"), "ὠκεανος");
        // 단어로 취급하지 않으면 기식 없음
        assert_eq!(latin_to_greek("aner", false, false).unwrap(), "ανερ");
    }

    #[test]
    fn test_rough_breathing_from_h() {
        assert_eq!(lg("hippos"), "ἱππος");
        // 단어 취급 여부와 무관
        assert_eq!(latin_to_greek("hippos", false, false).unwrap(), "ἱπποσ");
        assert_eq!(lg("Hellas"), "Ἑλλας");
    }

    #[test]
    fn test_breathing_on_diphthong() {
        assert_eq!(lg("eidos"), "εἰδος");
        assert_eq!(lg("hyios"), "υἱος");
        assert_eq!(lg("autos"), "αὐτος");
        // 분음 기호는 이중모음이 아님
        assert_eq!(lg("aïdios"), "ἀϊδιος");
        // 같은 글자, y/u 조합은 이중모음이 아님
        assert_eq!(lg("ii"), "ἰι");
        assert_eq!(lg("yu"), "ὐυ");
    }

    #[test]
    fn test_no_breathing_on_consonant() {
        assert_eq!(lg("theos"), "θεος");
    }

    #[test]
    fn test_aspirates_and_digraphs() {
        assert_eq!(lg("philos"), "φιλος");
        assert_eq!(lg("psykhe"), "ψυχε");
        assert_eq!(lg("psyche"), "ψυχε");
        assert_eq!(lg("ksenos"), "ξενος");
        assert_eq!(lg("xenos"), "ξενος");
        assert_eq!(lg("dzeus"), "ζευς");
        assert_eq!(lg("pʰos"), "φος");
        assert_eq!(lg("fos"), "φος");
    }

    #[test]
    fn test_rho_aspirate() {
        assert_eq!(lg("rhetor"), "ῥετορ");
        assert_eq!(lg("Pyrrhos"), "Πυῤῥος");
        // 앞 ρ의 대문자 유지
        assert_eq!(lg("Rrhos"), "\u{03A1}\u{0313}ῥος");
    }

    #[test]
    fn test_long_vowels() {
        assert_eq!(lg("psykhē"), "ψυχη");
        assert_eq!(lg("ōdē"), "ὠδη");
        // 틸데는 장모음 + 그리스 틸데
        assert_eq!(lg("gẽ"), "γῆ");
        // a의 장음 기호는 그대로 유지
        assert_eq!(lg("ā"), "ᾱ\u{0313}");
    }

    #[test]
    fn test_accents_are_kept() {
        assert_eq!(lg("lógos"), "λόγος");
        assert_eq!(lg("ēṓs"), "ἠώς");
    }

    #[test]
    fn test_capitalization() {
        assert_eq!(lg("Logos"), "Λογος");
        assert_eq!(lg("Sokrates"), "Σοκρατες");
        assert_eq!(lg("Wanax"), "Ϝαναξ");
        // 대문자 Σ는 어말형으로 바꾸지 않음
        assert_eq!(lg("LOGOS"), "ΛΟΓΟΣ");
    }

    #[test]
    fn test_breve() {
        assert_eq!(
            latin_to_greek("logos", false, true).unwrap(),
            "λο\u{0306}γο\u{0306}σ"
        );
        assert_eq!(latin_to_greek("ā", false, true).unwrap(), "ᾱ");
        assert_eq!(latin_to_greek("a", false, true).unwrap(), "ᾰ");
        // ē, ō에는 단음 기호 없음
        assert_eq!(latin_to_greek("ē", false, true).unwrap(), "η");
    }

    #[test]
    fn test_breve_never_with_macron() {
        use unicode_normalization::UnicodeNormalization;

        for word in ["ā", "ī", "ū", "ȳ", "ē", "ō"] {
            let out = latin_to_greek(word, true, true).unwrap();
            assert!(!out.nfd().any(|c| c == '\u{0306}'), "{word} -> {out}");
        }
    }

    #[test]
    fn test_invalid_letters() {
        let err = latin_to_greek("java", true, false).unwrap_err();
        assert_eq!(err.letter, "j");
        assert_eq!(err.word, "java");
        assert_eq!(err.to_string(), "Invalid input: j in java.");

        assert_eq!(latin_to_greek("quod", true, false).unwrap_err().letter, "q");
        assert_eq!(latin_to_greek("Venus", true, false).unwrap_err().letter, "v");
    }

    #[test]
    fn test_invalid_aspirate() {
        assert_eq!(latin_to_greek("bhos", true, false).unwrap_err().letter, "bʰ");
        assert_eq!(latin_to_greek("ah", true, false).unwrap_err().letter, "aʰ");
        assert_eq!(latin_to_greek("ʰa", true, false).unwrap_err().letter, "ʰ");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(lg("123"), "123");
        assert_eq!(lg("ß"), "ß");
    }

    #[test]
    fn test_lone_h() {
        assert_eq!(lg("h"), "");
        assert_eq!(lg(""), "");
    }
}
