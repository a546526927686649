//! 단어/구분자 분리기

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// 문장부호 범주는 아니지만 구분자로 취급하는 문자 (그리스 코로니스 ᾽)
/// U+1F7D는 글자 ώ이므로 구분자가 아님
const KORONIS: char = '\u{1FBD}';

/// 분리 결과 토큰
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// 변환 대상 단어
    Word(&'a str),
    /// 그대로 통과하는 공백/문장부호
    Separator(char),
}

/// 공백, 유니코드 문장부호(P*) 또는 코로니스이면 구분자
pub fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || c == KORONIS
        || c.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// 텍스트를 단어와 구분자 토큰으로 분리
/// 구분자는 연속되어도 한 글자씩 별도 토큰이 됨
pub fn segment(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        if is_separator(c) {
            if let Some(start) = word_start.take() {
                tokens.push(Token::Word(&text[start..idx]));
            }
            tokens.push(Token::Separator(c));
        } else if word_start.is_none() {
            word_start = Some(idx);
        }
    }

    if let Some(start) = word_start {
        tokens.push(Token::Word(&text[start..]));
    }

    tokens
}

/// 단어마다 `convert`를 적용하고 구분자는 그대로 유지
pub fn process_text<F>(text: &str, mut convert: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut output = String::with_capacity(text.len() * 2);
    for token in segment(text) {
        match token {
            Token::Word(word) => output.push_str(&convert(word)),
            Token::Separator(c) => output.push(c),
        }
    }
    output
}
