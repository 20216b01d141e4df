//! Knowledge Store - JSON 지식 파일 인메모리 캐시
//!
//! 시작 시 지식 디렉토리에서 고정된 8개 JSON 파일을 한 번만 로드합니다.
//! 로드 후에는 읽기 전용이며, 리로드/변경은 없습니다.
//! 개별 파일 로드 실패는 경고 로그 후 건너뜁니다 (생성 자체는 실패하지 않음).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// 지식베이스를 구성하는 고정 파일명 목록
pub const KNOWLEDGE_FILES: [&str; 8] = [
    "academic_policies_procedures.json",
    "all_programs_fees_2025_2026.json",
    "campus_facilities_services.json",
    "fees_financial_info.json",
    "mastercard_foundation_scholars.json",
    "programs.json",
    "student_conduct_discipline.json",
    "student_services_policies.json",
];

// ============================================================================
// Types
// ============================================================================

/// 지식 저장소 오류
///
/// 유일한 생성 실패 조건은 디렉토리 자체에 접근할 수 없는 경우입니다.
/// 개별 파일의 로드 실패는 오류가 아닙니다.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("knowledge directory unavailable: {}", .0.display())]
    DirectoryUnavailable(PathBuf),
}

/// 파일별 로드 상태 요약
#[derive(Debug, Clone, Serialize)]
pub struct FileStats {
    pub filename: String,
    /// 최상위 키 (최대 5개, 객체가 아니면 비어 있음)
    pub top_level_keys: Vec<String>,
}

/// 저장소 통계
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub loaded_count: usize,
    pub expected_count: usize,
    pub files: Vec<FileStats>,
}

// ============================================================================
// KnowledgeStore
// ============================================================================

/// JSON 지식 파일의 읽기 전용 인메모리 캐시
///
/// 문서는 파일명으로 식별되며, 내용은 임의 중첩 `serde_json::Value`로
/// 그대로 보관됩니다 (스키마 해석은 Generator의 몫).
pub struct KnowledgeStore {
    dir: PathBuf,
    cache: BTreeMap<String, Value>,
}

impl KnowledgeStore {
    /// 디렉토리에서 지식 파일 로드
    ///
    /// 파일이 없거나 JSON 파싱에 실패하면 해당 파일만 건너뛰고
    /// `tracing::warn!`을 남깁니다.
    pub fn open(dir: &Path) -> Result<Self, KnowledgeError> {
        if !dir.is_dir() {
            return Err(KnowledgeError::DirectoryUnavailable(dir.to_path_buf()));
        }

        let mut cache = BTreeMap::new();

        for filename in KNOWLEDGE_FILES {
            let filepath = dir.join(filename);

            let text = match std::fs::read_to_string(&filepath) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Skipping knowledge file {}: {}", filename, e);
                    continue;
                }
            };

            match serde_json::from_str::<Value>(&text) {
                Ok(value) => {
                    cache.insert(filename.to_string(), value);
                }
                Err(e) => {
                    tracing::warn!("Skipping knowledge file {}: invalid JSON: {}", filename, e);
                }
            }
        }

        tracing::info!(
            "Knowledge store loaded {}/{} files from {}",
            cache.len(),
            KNOWLEDGE_FILES.len(),
            dir.display()
        );

        Ok(Self {
            dir: dir.to_path_buf(),
            cache,
        })
    }

    /// 지식 디렉토리 경로
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 파일명으로 문서 조회
    pub fn get(&self, filename: &str) -> Option<&Value> {
        self.cache.get(filename)
    }

    /// 로드된 파일명 목록 (캐시 순서)
    pub fn filenames(&self) -> Vec<&str> {
        self.cache.keys().map(|k| k.as_str()).collect()
    }

    /// 로드된 문서 수
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// 저장소 통계 (파일별 최상위 키 미리보기 포함)
    pub fn stats(&self) -> StoreStats {
        let files = self
            .cache
            .iter()
            .map(|(filename, value)| FileStats {
                filename: filename.clone(),
                top_level_keys: value
                    .as_object()
                    .map(|obj| obj.keys().take(5).cloned().collect())
                    .unwrap_or_default(),
            })
            .collect();

        StoreStats {
            loaded_count: self.cache.len(),
            expected_count: KNOWLEDGE_FILES.len(),
            files,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
