//! 그리스 문자 -> 라틴 문자 변환기

use crate::core::diacritic::{decompose, Diacritic, Diacritics};
use crate::core::grapheme::Grapheme;
use crate::core::letter_map::{
    self, is_aspirated, is_greek_capital, is_latin_vowel, is_short_vowel,
};

/// 출력 글자
///
/// 하기 이오타는 조합된 글자 뒤에 별도의 "i"로 붙습니다.
#[derive(Debug, Clone)]
struct LatinLetter {
    grapheme: Grapheme,
    iota: bool,
}

impl LatinLetter {
    fn new(grapheme: Grapheme) -> Self {
        Self {
            grapheme,
            iota: false,
        }
    }

    /// 강기식에서 나온 h
    fn aspirate(capital: bool) -> Self {
        Self::new(Grapheme::new("h", Diacritics::new(), capital))
    }

    fn letter(&self) -> &str {
        &self.grapheme.letter
    }

    fn render(&self) -> String {
        let mut out = self.grapheme.render();
        if self.iota {
            out.push('i');
        }
        out
    }
}

/// 라틴식 철자 규칙 적용 결과
#[derive(Debug)]
enum Latinized {
    Keep,
    /// 현재 글자 철자를 교체
    Replace(String),
    /// γγ -> ng: 직전 출력을 n으로
    Nasalize,
    /// ει -> ī, ου -> ū: 직전 출력을 지우고 장음 기호 추가
    Lengthen,
}

/// 라틴식 철자 규칙 (우선순위 순)
fn latinize_letter(latin: &str, prev: Option<&str>, hiatus: bool) -> Latinized {
    match latin {
        "k" => Latinized::Replace(String::from("c")),
        "ks" => Latinized::Replace(String::from("x")),
        "kʰ" => Latinized::Replace(String::from("ch")),
        s if is_aspirated(s) => {
            Latinized::Replace(format!("{}h", s.trim_end_matches(letter_map::ASPIRATION)))
        }
        "g" if prev == Some("g") => Latinized::Nasalize,
        "i" if !hiatus && matches!(prev, Some("a" | "o")) => Latinized::Replace(String::from("e")),
        "i" if !hiatus && prev == Some("e") => Latinized::Lengthen,
        "u" if !hiatus && prev == Some("o") => Latinized::Lengthen,
        _ => Latinized::Keep,
    }
}

/// 그리스 단어를 글자 단위로 분해
fn tokenize(word: &str) -> Vec<Grapheme> {
    let mut graphemes: Vec<Grapheme> = Vec::new();

    for c in word.chars() {
        if Diacritic::from_char(c).is_some() {
            if let Some(prev) = graphemes.last_mut() {
                prev.diacritics.push_raw(c);
                continue;
            }
        }

        let (base, diacritics) = decompose(c);
        let capital = is_greek_capital(base);
        let base = if capital {
            base.to_lowercase().next().unwrap_or(base)
        } else {
            base
        };

        graphemes.push(Grapheme::new(base, diacritics, capital));
    }

    graphemes
}

/// 그리스 단어 하나를 라틴 문자로 변환
///
/// - `latinize`: k→c, ks→x, ph/th/ch, γγ→ng, ai/oi→ae/oe, ei→ī, ou→ū
/// - `add_breve`: 장음 기호가 없는 짧은 모음에 단음 기호 추가
///
/// 매핑에 없는 글자는 그대로 통과하므로 실패하지 않습니다.
pub fn greek_to_latin(word: &str, latinize: bool, add_breve: bool) -> String {
    let graphemes = tokenize(word);

    // 첫 글자만 대문자인 단어: 그 글자의 강기식이면 대문자는 삽입되는 h가 가져감 (Ὅμηρος -> Homēros)
    let title_case = graphemes.first().is_some_and(|g| g.capital)
        && graphemes.iter().skip(1).all(|g| !g.capital);

    let mut output: Vec<LatinLetter> = Vec::with_capacity(graphemes.len() + 1);

    for grapheme in &graphemes {
        let Grapheme {
            letter,
            mut diacritics,
            mut capital,
        } = grapheme.clone();

        let letter = if letter == "ς" { String::from("σ") } else { letter };

        let Some(latin) = letter_map::greek_to_latin(&letter) else {
            output.push(LatinLetter::new(Grapheme::new(letter, diacritics, capital)));
            continue;
        };
        let mut latin = latin.to_string();

        let iota = diacritics.remove(Diacritic::IotaSubscript);
        diacritics.replace(Diacritic::GreekTilde, Diacritic::Tilde);

        // 어두 모음 연속 구간에서만 기식 기호를 처리
        if output.iter().all(|l| is_latin_vowel(l.letter())) {
            diacritics.remove(Diacritic::Smooth);
            if diacritics.remove(Diacritic::Rough) {
                if capital && title_case {
                    capital = false;
                    output.insert(0, LatinLetter::aspirate(true));
                } else {
                    output.insert(0, LatinLetter::aspirate(capital));
                }
            }
        }

        let hiatus = diacritics.contains(Diacritic::Umlaut);

        // 모음 뒤의 υ는 이중모음 u
        let after_vowel = output
            .last()
            .is_some_and(|l| matches!(l.letter(), "a" | "e" | "ē" | "i" | "o" | "ō"));
        if latin == "y" && after_vowel && !hiatus {
            latin = String::from("u");
        }

        if latinize {
            let prev = output.last().map(|l| l.letter());
            match latinize_letter(&latin, prev, hiatus) {
                Latinized::Keep => {}
                Latinized::Replace(spelling) => latin = spelling,
                Latinized::Nasalize => {
                    if let Some(prev) = output.last_mut() {
                        prev.grapheme.letter = String::from("n");
                    }
                }
                Latinized::Lengthen => {
                    if let Some(prev) = output.pop() {
                        capital |= prev.grapheme.capital;
                    }
                    diacritics.prepend(Diacritic::Macron);
                }
            }
        }

        if add_breve && is_short_vowel(&latin) && !diacritics.contains(Diacritic::Macron) {
            diacritics.prepend(Diacritic::Breve);
        }

        output.push(LatinLetter {
            grapheme: Grapheme::new(latin, diacritics, capital),
            iota,
        });
    }

    let result: String = output.iter().map(LatinLetter::render).collect();
    log::debug!("그리스→라틴: {} -> {}", word, result);
    result
}
