//! 라틴 <-> 그리스 단어 변환 핵심 로직

pub mod converter;
pub mod diacritic;
pub mod grapheme;
pub mod greek_to_latin;
pub mod latin_to_greek;
pub mod letter_map;
