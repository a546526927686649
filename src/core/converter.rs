//! 설정에 따른 통합 변환기

use crate::config::{Direction, TranslitConfig};
use crate::core::greek_to_latin::greek_to_latin;
use crate::core::latin_to_greek::{latin_to_greek, InvalidLetterError};
use crate::text::process_text;

/// 설정된 방향과 옵션으로 단어 하나를 변환
pub fn convert(word: &str, config: &TranslitConfig) -> Result<String, InvalidLetterError> {
    match config.direction {
        Direction::LatinToGreek => latin_to_greek(word, config.treat_as_word, config.breve),
        Direction::GreekToLatin => Ok(greek_to_latin(word, config.latinize, config.breve)),
    }
}

/// 문장을 단어별로 변환
/// 변환할 수 없는 단어는 그 자리에 오류 메시지를 출력
pub fn convert_text(text: &str, config: &TranslitConfig) -> String {
    process_text(text, |word| match convert(word, config) {
        Ok(converted) => converted,
        Err(e) => {
            log::warn!("단어 변환 실패: {}", e);
            e.to_string()
        }
    })
}
