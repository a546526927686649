//! 유니코드 발음 구별 기호 분해/조합 유틸리티

use unicode_normalization::char::decompose_canonical;
use unicode_normalization::UnicodeNormalization;

/// 인식하는 결합 기호 목록
/// 조합 순서: 장음/단음 기호 → 기식 기호 → 나머지 악센트
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diacritic {
    Acute,
    Grave,
    Macron,
    Breve,
    Caron,
    Circumflex,
    /// 라틴 틸데 (ã)
    Tilde,
    Umlaut,
    /// 강기식 (ἁ)
    Rough,
    /// 약기식 (ἀ)
    Smooth,
    /// 그리스 틸데, 페리스포메니 (ᾶ). 라틴 틸데와 다른 코드포인트
    GreekTilde,
    /// 하기 이오타 (ᾳ)
    IotaSubscript,
}

impl Diacritic {
    pub const ALL: [Diacritic; 12] = [
        Diacritic::Acute,
        Diacritic::Grave,
        Diacritic::Macron,
        Diacritic::Breve,
        Diacritic::Caron,
        Diacritic::Circumflex,
        Diacritic::Tilde,
        Diacritic::Umlaut,
        Diacritic::Rough,
        Diacritic::Smooth,
        Diacritic::GreekTilde,
        Diacritic::IotaSubscript,
    ];

    /// 결합 코드포인트
    pub const fn codepoint(self) -> char {
        match self {
            Diacritic::Acute => '\u{0301}',
            Diacritic::Grave => '\u{0300}',
            Diacritic::Macron => '\u{0304}',
            Diacritic::Breve => '\u{0306}',
            Diacritic::Caron => '\u{030C}',
            Diacritic::Circumflex => '\u{0302}',
            Diacritic::Tilde => '\u{0303}',
            Diacritic::Umlaut => '\u{0308}',
            Diacritic::Rough => '\u{0314}',
            Diacritic::Smooth => '\u{0313}',
            Diacritic::GreekTilde => '\u{0342}',
            Diacritic::IotaSubscript => '\u{0345}',
        }
    }

    /// 코드포인트가 인식하는 결합 기호이면 해당 종류 반환
    pub fn from_char(c: char) -> Option<Diacritic> {
        Diacritic::ALL.into_iter().find(|d| d.codepoint() == c)
    }
}

/// 순서가 있는 결합 기호 목록
///
/// 조합 결과가 순서에 따라 달라지므로 집합이 아닌 시퀀스로 관리합니다.
/// 분해 중 발견된 미인식 기호(예: U+0323)도 코드포인트 그대로 보존됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diacritics(Vec<char>);

impl Diacritics {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기호 하나로 된 목록
    pub fn single(kind: Diacritic) -> Self {
        Self(vec![kind.codepoint()])
    }

    /// 원시 코드포인트 추가 (중복 검사 없음, 토큰화 단계 전용)
    pub fn push_raw(&mut self, c: char) {
        self.0.push(c);
    }

    pub fn contains(&self, kind: Diacritic) -> bool {
        self.0.contains(&kind.codepoint())
    }

    /// 첫 번째 해당 기호 제거. 제거했으면 true
    pub fn remove(&mut self, kind: Diacritic) -> bool {
        match self.0.iter().position(|&c| c == kind.codepoint()) {
            Some(idx) => {
                self.0.remove(idx);
                true
            }
            None => false,
        }
    }

    /// 해당 기호 전부 제거. 제거했으면 true
    pub fn remove_all(&mut self, kind: Diacritic) -> bool {
        let before = self.0.len();
        self.0.retain(|&c| c != kind.codepoint());
        self.0.len() != before
    }

    /// 맨 앞에 삽입. 같은 종류가 이미 있으면 그것을 앞으로 옮김
    pub fn prepend(&mut self, kind: Diacritic) {
        self.remove_all(kind);
        self.0.insert(0, kind.codepoint());
    }

    /// 맨 뒤에 추가. 같은 종류가 이미 있으면 그것을 뒤로 옮김
    pub fn append(&mut self, kind: Diacritic) {
        self.remove_all(kind);
        self.0.push(kind.codepoint());
    }

    /// 해당 기호가 있으면 맨 앞으로 이동
    pub fn move_to_front(&mut self, kind: Diacritic) {
        if self.contains(kind) {
            self.prepend(kind);
        }
    }

    /// `from` 기호를 모두 제거하고 `to` 기호를 하나 덧붙임
    pub fn replace(&mut self, from: Diacritic, to: Diacritic) {
        if self.remove_all(from) {
            self.append(to);
        }
    }
}

/// 문자를 기본 글자와 결합 기호로 분해
///
/// 정준 분해를 재귀적으로 적용합니다 (NFD와 동일).
/// 반환되는 기호는 조합 순서대로, 즉 기본 글자에 가장 먼저 붙은 기호가 앞에 옵니다.
/// 분해되지 않는 문자는 기호 없이 그대로 반환됩니다.
pub fn decompose(c: char) -> (char, Diacritics) {
    let mut parts = Vec::with_capacity(4);
    decompose_canonical(c, |d| parts.push(d));

    let mut parts = parts.into_iter();
    let base = parts.next().unwrap_or(c);
    (base, Diacritics(parts.collect()))
}

/// 기본 글자(여러 글자 철자 가능)와 결합 기호를 조합
///
/// NFC로 정규화하므로 완성형이 있으면 완성형을, 없으면 분해된 시퀀스를 그대로 돌려줍니다.
/// 예: ē + 틸데 → "ē\u{0303}"
pub fn compose(base: &str, diacritics: &Diacritics) -> String {
    base.chars().chain(diacritics.0.iter().copied()).nfc().collect()
}
