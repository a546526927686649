//! 그리스 문자 <-> 라틴 철자 매핑 테이블

use std::collections::HashMap;

use lazy_static::lazy_static;

/// 유기음 표시 문자 (pʰ, tʰ, kʰ)
pub const ASPIRATION: char = 'ʰ';

/// 그리스 문자 -> 라틴 철자 (22자 + 디감마)
const GREEK_LATIN_PAIRS: [(&str, &str); 25] = [
    // 모음
    ("α", "a"),
    ("ε", "e"),
    ("η", "ē"),
    ("ι", "i"),
    ("ο", "o"),
    ("ω", "ō"),
    ("υ", "y"),
    // 자음
    ("β", "b"),
    ("π", "p"),
    ("φ", "pʰ"),
    ("δ", "d"),
    ("τ", "t"),
    ("θ", "tʰ"),
    ("γ", "g"),
    ("κ", "k"),
    ("χ", "kʰ"),
    ("ζ", "z"),
    ("σ", "s"),
    ("μ", "m"),
    ("ν", "n"),
    ("λ", "l"),
    ("ρ", "r"),
    ("ξ", "ks"),
    ("ψ", "ps"),
    ("ϝ", "w"),
];

/// 라틴 -> 그리스 방향에만 있는 추가 철자
const LATIN_ONLY_PAIRS: [(&str, &str); 5] = [
    ("u", "υ"),
    ("c", "κ"),
    ("cʰ", "χ"),
    ("f", "φ"),
    ("x", "ξ"),
];

lazy_static! {
    static ref GREEK_TO_LATIN: HashMap<&'static str, &'static str> =
        GREEK_LATIN_PAIRS.iter().copied().collect();

    static ref LATIN_TO_GREEK: HashMap<&'static str, &'static str> = GREEK_LATIN_PAIRS
        .iter()
        .map(|&(greek, latin)| (latin, greek))
        .chain(LATIN_ONLY_PAIRS.iter().copied())
        .collect();
}

/// 그리스 소문자(기호 없음)를 라틴 철자로 변환
/// 매핑에 없는 문자는 None 반환
pub fn greek_to_latin(letter: &str) -> Option<&'static str> {
    GREEK_TO_LATIN.get(letter).copied()
}

/// 라틴 철자(소문자, 기호 없음)를 그리스 문자로 변환
pub fn latin_to_greek(spelling: &str) -> Option<&'static str> {
    LATIN_TO_GREEK.get(spelling).copied()
}

/// 라틴 모음 철자인지 확인 (a, e, ē, i, o, ō, y, u)
pub fn is_latin_vowel(spelling: &str) -> bool {
    matches!(spelling, "a" | "e" | "ē" | "i" | "o" | "ō" | "y" | "u")
}

/// 이중모음의 두 번째 글자가 될 수 있는지 확인 (i, y, u)
pub fn is_glide(spelling: &str) -> bool {
    matches!(spelling, "i" | "y" | "u")
}

/// 본래 짧은 모음인지 확인 (a, e, i, o, y, u)
pub fn is_short_vowel(spelling: &str) -> bool {
    matches!(spelling, "a" | "e" | "i" | "o" | "y" | "u")
}

/// 유기음 표시가 붙은 철자인지 확인
pub fn is_aspirated(spelling: &str) -> bool {
    spelling.ends_with(ASPIRATION)
}

/// 그리스 대문자 범위 (Α–Ω)
pub fn is_greek_capital(c: char) -> bool {
    ('Α'..='Ω').contains(&c)
}
