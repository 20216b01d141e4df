//! usiu-support - USIU-Africa 학생 지원 챗봇 코어
//!
//! 규칙 기반 3단계 파이프라인입니다:
//! 키워드 스코어링 라우팅 → 카테고리별 지식 파일 선택 → 템플릿 응답 생성.
//! 학습 모델/임베딩 없이, 시작 시 한 번 로드한 JSON 지식만 사용합니다.

pub mod cli;
pub mod generator;
pub mod knowledge;
pub mod router;
pub mod supervisor;

// Re-exports
pub use generator::ResponseGenerator;
pub use knowledge::{
    FileStats, KnowledgeError, KnowledgeRetriever, KnowledgeStore, StoreStats,
    KNOWLEDGE_FILES,
};
pub use router::{Category, QueryRouter};
pub use supervisor::{HistoryEntry, QueryResult, Supervisor};
