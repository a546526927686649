//! 문장 단위 처리
//!
//! 변환기는 단어 하나만 받으므로, 자유 텍스트를 단어와 구분자로 나눈 뒤
//! 단어만 변환하고 구분자는 그대로 다시 끼워 넣습니다.

mod segmenter;

pub use segmenter::{is_separator, process_text, segment, Token};
