//! 설정 파일 로드/저장 (JSON)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 변환 방향
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// 라틴 -> 그리스
    #[default]
    #[serde(rename = "lg")]
    #[value(name = "lg")]
    LatinToGreek,
    /// 그리스 -> 라틴
    #[serde(rename = "gl")]
    #[value(name = "gl")]
    GreekToLatin,
}

/// 변환 기본 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TranslitConfig {
    #[serde(default)]
    pub direction: Direction,
    /// 단어로 취급 (약기식, 어말 ς). 라틴 -> 그리스 전용
    #[serde(default = "default_treat_as_word")]
    pub treat_as_word: bool,
    /// 라틴식 철자. 그리스 -> 라틴 전용
    #[serde(default)]
    pub latinize: bool,
    /// 짧은 모음에 단음 기호
    #[serde(default)]
    pub breve: bool,
}

fn default_treat_as_word() -> bool {
    true
}

impl Default for TranslitConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            treat_as_word: default_treat_as_word(),
            latinize: false,
            breve: false,
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/transliterate/config.json
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };

    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("transliterate").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> TranslitConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> TranslitConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            TranslitConfig::default()
        }),
        Err(_) => TranslitConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &TranslitConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &TranslitConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
