//! Router 모듈 - 질문 카테고리 분류
//!
//! 키워드 카운트 스코어링으로 자유 텍스트 질문을
//! 6개 고정 카테고리 중 하나로 분류합니다.
//! 학습 모델 없음, 임베딩 없음 - 순수 부분 문자열 매칭입니다.

use serde::Serialize;

// ============================================================================
// Category
// ============================================================================

/// 질문 카테고리 (6개 고정, 런타임 확장 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FeesFinancial,
    Academic,
    Facilities,
    Services,
    Conduct,
    General,
}

impl Category {
    /// 전체 카테고리 (정의 순서 = 스코어링 순회 순서)
    pub const ALL: [Category; 6] = [
        Category::FeesFinancial,
        Category::Academic,
        Category::Facilities,
        Category::Services,
        Category::Conduct,
        Category::General,
    ];

    /// 안정적인 문자열 라벨
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FeesFinancial => "fees_financial",
            Category::Academic => "academic",
            Category::Facilities => "facilities",
            Category::Services => "services",
            Category::Conduct => "conduct",
            Category::General => "general",
        }
    }

    /// 카테고리별 키워드 트리거 (General은 비어 있음 = 기본값 역할)
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::FeesFinancial => &[
                "fee", "cost", "tuition", "payment", "pay", "bank", "mpesa", "price",
                "charge",
            ],
            Category::Academic => &[
                "program", "course", "degree", "major", "gpa", "grade", "credit",
                "graduation", "admission",
            ],
            Category::Facilities => &[
                "library", "lab", "classroom", "building", "cafeteria", "gym", "hostel",
                "where is",
            ],
            Category::Services => &[
                "counseling", "health", "career", "financial aid", "scholarship",
                "housing",
            ],
            Category::Conduct => &[
                "rule", "policy", "conduct", "discipline", "violation", "alcohol", "drug",
            ],
            Category::General => &[],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// QueryRouter
// ============================================================================

/// 키워드 스코어링 기반 질문 라우터
///
/// 상태 없음 - 키워드 테이블은 전부 상수입니다.
#[derive(Debug, Default)]
pub struct QueryRouter;

impl QueryRouter {
    pub fn new() -> Self {
        Self
    }

    /// 질문을 카테고리로 분류
    ///
    /// 소문자화한 질문에 대해 카테고리별로 포함된 키워드 수를 세고,
    /// 스코어가 가장 높은 카테고리를 반환합니다.
    /// 동점이면 먼저 정의된 카테고리가 이깁니다 (결정적 tie-break).
    /// 매칭되는 키워드가 하나도 없으면 General입니다.
    pub fn route(&self, query: &str) -> Category {
        let query_lower = query.to_lowercase();

        let mut best: Option<(Category, usize)> = None;

        for category in Category::ALL {
            let score = category
                .keywords()
                .iter()
                .filter(|keyword| query_lower.contains(*keyword))
                .count();

            if score > 0 && best.map_or(true, |(_, s)| score > s) {
                best = Some((category, score));
            }
        }

        let category = best.map_or(Category::General, |(c, _)| c);
        tracing::debug!("Routed query to category: {}", category);

        category
    }
}

// ============================================================================
// Tests
// ============================================================================
