//! Supervisor 모듈 - 파이프라인 오케스트레이션
//!
//! Router → Retriever → Generator를 순서대로 호출하고
//! 결과를 인메모리 히스토리에 기록합니다.
//! 지식 캐시는 로드 후 읽기 전용이므로 락 없이 공유되고,
//! 유일한 가변 상태인 히스토리만 Mutex로 직렬화합니다.

use std::path::Path;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::generator::ResponseGenerator;
use crate::knowledge::{KnowledgeError, KnowledgeRetriever, StoreStats};
use crate::router::{Category, QueryRouter};

// ============================================================================
// Types
// ============================================================================

/// 요청 하나에 대한 처리 결과
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub query: String,
    pub category: Category,
    pub answer: String,
    /// 실제로 참조한 지식 파일명 (없으면 빈 목록)
    pub sources: Vec<String>,
}

/// 히스토리 항목
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub query: String,
    pub category: Category,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

// ============================================================================
// Supervisor
// ============================================================================

/// 파이프라인 오케스트레이터
///
/// 히스토리는 상한 없이 자랍니다 - 표시 시 자르는 것은 호출자의 몫입니다
/// (CLI는 최근 10개만 보여줍니다).
pub struct Supervisor {
    router: QueryRouter,
    retriever: KnowledgeRetriever,
    generator: ResponseGenerator,
    history: Mutex<Vec<HistoryEntry>>,
}

impl Supervisor {
    /// 지식 디렉토리로 파이프라인 구성
    ///
    /// 디렉토리 자체에 접근할 수 없을 때만 실패합니다.
    pub fn new(knowledge_dir: &Path) -> Result<Self, KnowledgeError> {
        let retriever = KnowledgeRetriever::new(knowledge_dir)?;

        Ok(Self {
            router: QueryRouter::new(),
            retriever,
            generator: ResponseGenerator::new(),
            history: Mutex::new(Vec::new()),
        })
    }

    /// 질문 하나를 파이프라인 전체에 통과
    ///
    /// 어떤 입력이든 항상 결과를 반환합니다 (오류 없음).
    pub fn process(&self, query: &str) -> QueryResult {
        // 1. 카테고리 분류
        let category = self.router.route(query);

        // 2. 지식 검색
        let knowledge = self.retriever.retrieve(category, query);
        let sources: Vec<String> = knowledge.iter().map(|(name, _)| name.to_string()).collect();

        // 3. 응답 생성
        let answer = self.generator.generate(query, &knowledge, category);

        tracing::info!(
            "Processed query (category={}, sources={})",
            category,
            sources.len()
        );

        // 4. 히스토리 기록
        let entry = HistoryEntry {
            query: query.to_string(),
            category,
            answer: answer.clone(),
            asked_at: Utc::now(),
        };
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);

        QueryResult {
            query: query.to_string(),
            category,
            answer,
            sources,
        }
    }

    /// 전체 히스토리 스냅샷 (호출 순서 유지)
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 최근 n개 히스토리
    pub fn recent(&self, n: usize) -> Vec<HistoryEntry> {
        let history = self.history.lock().unwrap_or_else(PoisonError::into_inner);
        let start = history.len().saturating_sub(n);
        history[start..].to_vec()
    }

    /// 지식 저장소 통계
    pub fn knowledge_stats(&self) -> StoreStats {
        self.retriever.store().stats()
    }

    /// 로드된 지식 파일 수
    pub fn knowledge_count(&self) -> usize {
        self.retriever.store().len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_supervisor() -> (TempDir, Supervisor) {
        let dir = TempDir::new().unwrap();

        let fees = json!({
            "undergraduate": {
                "nursing": {
                    "program": "Bachelor of Science in Nursing",
                    "fees_per_semester": {
                        "kenyan": {"total": 514_500},
                        "east_african": {"total": 540_225},
                        "non_east_african": {"total": 617_400}
                    }
                }
            }
        });
        let banks = json!({
            "banks": {
                "KCB Bank": {"account_number": "1123456789", "branch": "Sarit Centre"}
            }
        });
        let facilities = json!({"campus": "main"});

        std::fs::write(
            dir.path().join("all_programs_fees_2025_2026.json"),
            fees.to_string(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("fees_financial_info.json"),
            banks.to_string(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("campus_facilities_services.json"),
            facilities.to_string(),
        )
        .unwrap();

        let supervisor = Supervisor::new(dir.path()).unwrap();
        (dir, supervisor)
    }

    #[test]
    fn test_new_fails_on_missing_directory() {
        let result = Supervisor::new(Path::new("/nonexistent/knowledge"));
        assert!(result.is_err());
    }

    #[test]
    fn test_process_nursing_fees() {
        let (_dir, supervisor) = create_test_supervisor();

        let result = supervisor.process("What are the fees for nursing?");
        assert_eq!(result.category, Category::FeesFinancial);
        assert!(result.answer.contains("Bachelor of Science in Nursing"));
        assert!(result.answer.contains("KES 514,500"));
        assert!(result
            .sources
            .contains(&"all_programs_fees_2025_2026.json".to_string()));
    }

    #[test]
    fn test_process_mpesa() {
        let (_dir, supervisor) = create_test_supervisor();

        let result = supervisor.process("How do I pay via M-Pesa?");
        assert_eq!(result.category, Category::FeesFinancial);
        assert!(result.answer.contains("516900"));
    }

    #[test]
    fn test_process_library_hours() {
        let (_dir, supervisor) = create_test_supervisor();

        let result = supervisor.process("What are the library hours?");
        assert_eq!(result.category, Category::Facilities);
        assert!(result.answer.contains("8:15 AM - 9:00 PM"));
    }

    #[test]
    fn test_process_empty_sources_when_category_unloaded() {
        let (_dir, supervisor) = create_test_supervisor();

        // conduct 파일은 로드되지 않음 → 소스 없음 → 폴백 메시지
        let result = supervisor.process("What are the rules about alcohol?");
        assert_eq!(result.category, Category::Conduct);
        assert!(result.sources.is_empty());
        assert!(result.answer.contains("don't have specific information"));
    }

    #[test]
    fn test_process_is_idempotent_modulo_history() {
        let (_dir, supervisor) = create_test_supervisor();

        let first = supervisor.process("What are the fees for nursing?");
        let second = supervisor.process("What are the fees for nursing?");
        assert_eq!(first.category, second.category);
        assert_eq!(first.answer, second.answer);
        assert_eq!(supervisor.history().len(), 2);
    }

    #[test]
    fn test_history_records_in_call_order() {
        let (_dir, supervisor) = create_test_supervisor();

        supervisor.process("first question about fees");
        supervisor.process("where is the library");

        let history = supervisor.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].query, "first question about fees");
        assert_eq!(history[1].query, "where is the library");
    }

    #[test]
    fn test_recent_trims_to_last_n() {
        let (_dir, supervisor) = create_test_supervisor();

        for i in 0..5 {
            supervisor.process(&format!("question {i}"));
        }

        let recent = supervisor.recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].query, "question 2");
        assert_eq!(recent[2].query, "question 4");

        // n이 전체보다 커도 안전
        assert_eq!(supervisor.recent(100).len(), 5);
    }

    #[test]
    fn test_knowledge_stats() {
        let (_dir, supervisor) = create_test_supervisor();
        assert_eq!(supervisor.knowledge_count(), 3);
        assert_eq!(supervisor.knowledge_stats().loaded_count, 3);
    }
}
