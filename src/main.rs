//! 라틴 <-> 그리스 음역 CLI
//!
//! 표준 입력에서 한 줄씩 읽어 단어별로 변환합니다.
//! 빈 줄, `quit`, EOF에서 종료합니다.

use std::io::{self, BufRead, Write};

use clap::Parser;
use transliterate::config::{load_config, save_config, Direction, TranslitConfig};
use transliterate::convert_text;

/// 고대 그리스어 음역 도구
#[derive(Parser, Debug)]
#[command(name = "transliterate", version, about)]
struct Cli {
    /// 변환 방향: lg (라틴 -> 그리스), gl (그리스 -> 라틴)
    #[arg(short = 't', long = "type", value_enum)]
    direction: Option<Direction>,

    /// 단어로 취급하지 않음: 약기식과 어말 ς 생략 (라틴 -> 그리스)
    #[arg(short = 'n', long)]
    not_word: bool,

    /// 라틴식 철자 사용 (그리스 -> 라틴)
    #[arg(short, long)]
    latinize: bool,

    /// 짧은 모음에 단음 기호 추가
    #[arg(short, long)]
    breve: bool,

    /// 현재 옵션을 기본 설정으로 저장
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// 명령행 옵션으로 저장된 설정을 덮어씀
    fn apply(&self, mut config: TranslitConfig) -> TranslitConfig {
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        if self.not_word {
            config.treat_as_word = false;
        }
        if self.latinize {
            config.latinize = true;
        }
        if self.breve {
            config.breve = true;
        }
        config
    }
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.apply(load_config());
    log::debug!("설정: {:?}", config);

    if cli.save_config {
        if let Err(e) = save_config(&config) {
            log::error!("설정 저장 실패: {}", e);
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };

        if line.is_empty() || line == "quit" {
            break;
        }

        if let Err(e) = writeln!(stdout, "{}", convert_text(&line, &config)) {
            log::error!("출력 실패: {}", e);
            break;
        }
    }
}
