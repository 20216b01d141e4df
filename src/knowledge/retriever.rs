//! Knowledge Retriever - 카테고리 → 지식 파일 매핑
//!
//! "검색"은 정적 테이블 조회입니다: 각 카테고리에 관련 파일명 목록이
//! 고정되어 있고, 그중 실제로 로드된 문서만 반환합니다.
//! 매핑에 있지만 로드에 실패한 파일은 조용히 빠집니다.

use std::path::Path;

use serde_json::Value;

use super::store::{KnowledgeError, KnowledgeStore};
use crate::router::Category;

// ============================================================================
// File Mapping
// ============================================================================

/// 카테고리별 관련 지식 파일 (정의 순서 유지)
///
/// General은 로드된 전체 파일을 의미하므로 테이블에 없습니다.
fn relevant_files(category: Category) -> &'static [&'static str] {
    match category {
        Category::FeesFinancial => &[
            "all_programs_fees_2025_2026.json",
            "fees_financial_info.json",
        ],
        Category::Academic => &["academic_policies_procedures.json", "programs.json"],
        Category::Facilities => &["campus_facilities_services.json"],
        Category::Services => &[
            "student_services_policies.json",
            "mastercard_foundation_scholars.json",
        ],
        Category::Conduct => &["student_conduct_discipline.json"],
        Category::General => &[],
    }
}

// ============================================================================
// KnowledgeRetriever
// ============================================================================

/// 카테고리 기반 지식 검색기
///
/// 생성 시 [`KnowledgeStore`]를 열어 전체 지식을 메모리에 올립니다.
/// 이후에는 읽기 전용이므로 락 없이 공유해도 안전합니다.
pub struct KnowledgeRetriever {
    store: KnowledgeStore,
}

impl KnowledgeRetriever {
    /// 지식 디렉토리로 생성
    pub fn new(knowledge_dir: &Path) -> Result<Self, KnowledgeError> {
        let store = KnowledgeStore::open(knowledge_dir)?;
        Ok(Self { store })
    }

    /// 카테고리에 해당하는 문서 반환 (파일명, 문서) 쌍 목록
    ///
    /// General은 로드된 전체 문서를 반환합니다.
    /// `query`는 현재 사용하지 않습니다 (향후 관련도 랭킹용으로 예약).
    pub fn retrieve<'a>(&'a self, category: Category, _query: &str) -> Vec<(&'a str, &'a Value)> {
        if category == Category::General {
            return self
                .store
                .filenames()
                .into_iter()
                .filter_map(|name| self.store.get(name).map(|doc| (name, doc)))
                .collect();
        }

        relevant_files(category)
            .iter()
            .filter_map(|&name| self.store.get(name).map(|doc| (name, doc)))
            .collect()
    }

    /// 내부 스토어 접근
    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }
}

// ============================================================================
// Tests
// ============================================================================
