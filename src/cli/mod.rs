//! CLI 모듈
//!
//! usiu-support CLI 명령어 정의 및 구현

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::router::Category;
use crate::supervisor::{QueryResult, Supervisor};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "usiu-support")]
#[command(version, about = "USIU-Africa 학생 지원 챗봇", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 질문 하나를 처리하고 응답 출력
    Ask {
        /// 질문 텍스트
        question: String,

        /// 지식 디렉토리 경로
        #[arg(short, long, default_value = "knowledge")]
        knowledge_dir: PathBuf,

        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 대화형 모드 (exit/quit로 종료, history로 최근 기록)
    Chat {
        /// 지식 디렉토리 경로
        #[arg(short, long, default_value = "knowledge")]
        knowledge_dir: PathBuf,
    },

    /// 샘플 질문으로 파이프라인 데모 실행
    Demo {
        /// 지식 디렉토리 경로
        #[arg(short, long, default_value = "knowledge")]
        knowledge_dir: PathBuf,
    },

    /// 질문 카테고리 목록 출력
    Categories,

    /// 지식베이스 상태 확인
    Status {
        /// 지식 디렉토리 경로
        #[arg(short, long, default_value = "knowledge")]
        knowledge_dir: PathBuf,
    },
}

// ============================================================================
// CLI Runner
// ============================================================================

/// CLI 명령어 실행
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ask {
            question,
            knowledge_dir,
            json,
        } => cmd_ask(&question, &knowledge_dir, json),
        Commands::Chat { knowledge_dir } => cmd_chat(&knowledge_dir),
        Commands::Demo { knowledge_dir } => cmd_demo(&knowledge_dir),
        Commands::Categories => cmd_categories(),
        Commands::Status { knowledge_dir } => cmd_status(&knowledge_dir),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

/// 단일 질문 명령어 (ask)
fn cmd_ask(question: &str, knowledge_dir: &Path, json: bool) -> Result<()> {
    let supervisor = Supervisor::new(knowledge_dir).context("지식베이스 로드 실패")?;

    let result = supervisor.process(question);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}

/// 대화형 모드 명령어 (chat)
fn cmd_chat(knowledge_dir: &Path) -> Result<()> {
    let supervisor = Supervisor::new(knowledge_dir).context("지식베이스 로드 실패")?;

    println!("USIU-Africa 학생 지원 챗봇 (종료: exit/quit, 기록: history)");
    println!(
        "[*] 지식 파일 로드: {}/{}",
        supervisor.knowledge_count(),
        crate::knowledge::KNOWLEDGE_FILES.len()
    );
    println!();

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }
        if line.eq_ignore_ascii_case("history") {
            // 원본 API처럼 최근 10개만 표시
            let recent = supervisor.recent(10);
            if recent.is_empty() {
                println!("[!] 기록이 없습니다.");
            } else {
                for entry in recent {
                    println!(
                        "  [{}] [{}] {}",
                        entry.asked_at.format("%H:%M:%S"),
                        entry.category,
                        entry.query
                    );
                }
            }
            println!();
            continue;
        }

        let result = supervisor.process(line);
        print_result(&result);
        println!();
    }

    Ok(())
}

/// 데모 명령어 (demo) - 대표 질문들을 순서대로 처리
fn cmd_demo(knowledge_dir: &Path) -> Result<()> {
    let sample_queries = [
        "What are the fees for nursing?",
        "How do I pay via M-Pesa?",
        "What is the minimum GPA required?",
        "Where is the library?",
        "What are the library hours?",
        "Tell me about scholarships",
        "What are the rules about alcohol?",
        "How do I contact the finance office?",
    ];

    let supervisor = Supervisor::new(knowledge_dir).context("지식베이스 로드 실패")?;
    println!(
        "[*] 지식 파일 로드: {}/{}",
        supervisor.knowledge_count(),
        crate::knowledge::KNOWLEDGE_FILES.len()
    );

    for (i, query) in sample_queries.iter().enumerate() {
        println!();
        println!("--- Query {}/{}: {}", i + 1, sample_queries.len(), query);
        let result = supervisor.process(query);
        print_result(&result);
    }

    println!();
    println!("[OK] 데모 완료 (처리 {} 건)", supervisor.history().len());

    Ok(())
}

/// 카테고리 목록 명령어 (categories)
fn cmd_categories() -> Result<()> {
    println!("[OK] 질문 카테고리 ({} 개):", Category::ALL.len());
    for category in Category::ALL {
        let keywords = category.keywords();
        if keywords.is_empty() {
            println!("  {} (기본값)", category);
        } else {
            println!("  {} - 키워드 {} 개", category, keywords.len());
        }
    }
    Ok(())
}

/// 상태 명령어 (status)
fn cmd_status(knowledge_dir: &Path) -> Result<()> {
    println!("usiu-support v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("[*] 지식 디렉토리: {}", knowledge_dir.display());

    let supervisor = match Supervisor::new(knowledge_dir) {
        Ok(s) => s,
        Err(e) => {
            println!("[!] 지식베이스 로드 실패: {}", e);
            return Ok(());
        }
    };

    let stats = supervisor.knowledge_stats();
    println!(
        "[OK] 로드된 지식 파일: {}/{} 건",
        stats.loaded_count, stats.expected_count
    );

    for file in &stats.files {
        println!("  {}", file.filename);
        if !file.top_level_keys.is_empty() {
            println!("    최상위 키: {}", file.top_level_keys.join(", "));
        }
    }

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 처리 결과 출력
fn print_result(result: &QueryResult) {
    println!("[OK] 카테고리: {}", result.category);

    if result.sources.is_empty() {
        println!("     소스: 없음");
    } else {
        println!("     소스: {}", result.sources.join(", "));
    }

    println!();
    println!("{}", truncate_text(&result.answer, 500));
}

/// 텍스트 자르기 (UTF-8 안전)
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 5), "hello...");
    }

    #[test]
    fn test_truncate_unicode() {
        let korean = "안녕하세요 세계";
        assert_eq!(truncate_text(korean, 5), "안녕하세요...");
    }
}
