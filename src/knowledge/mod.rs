//! Knowledge 모듈 - 지식베이스 로딩 및 검색
//!
//! - Store: 고정된 8개 JSON 파일을 시작 시 한 번 로드하는 읽기 전용 캐시
//! - Retriever: 카테고리 → 파일 목록 정적 매핑으로 문서 부분집합 선택

mod retriever;
mod store;

// Re-exports
pub use retriever::KnowledgeRetriever;
pub use store::{FileStats, KnowledgeError, KnowledgeStore, StoreStats, KNOWLEDGE_FILES};
