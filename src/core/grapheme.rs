//! 변환 단위 (글자 + 결합 기호 + 대문자 여부)

use crate::core::diacritic::{compose, Diacritics};

/// 변환의 최소 단위
///
/// `letter`는 항상 소문자 정규 철자입니다. 유기음(pʰ)이나 ks, ps처럼
/// 원문에서 두 글자였던 것도 하나의 철자로 다룹니다.
/// 대문자는 출력 단계(`render`)에서만 적용됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grapheme {
    pub letter: String,
    pub diacritics: Diacritics,
    pub capital: bool,
}

impl Grapheme {
    pub fn new(letter: impl Into<String>, diacritics: Diacritics, capital: bool) -> Self {
        Self {
            letter: letter.into(),
            diacritics,
            capital,
        }
    }

    /// 대문자 적용 후 기호를 조합한 최종 문자열
    pub fn render(&self) -> String {
        if self.capital {
            compose(&capitalize(&self.letter), &self.diacritics)
        } else {
            compose(&self.letter, &self.diacritics)
        }
    }
}

/// 첫 글자만 대문자로 (pʰ -> Pʰ, ch -> Ch, ϝ -> Ϝ)
pub fn capitalize(letter: &str) -> String {
    let mut chars = letter.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
