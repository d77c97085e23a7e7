//! 페이지네이션 계산기
//!
//! `page`/`size` 쿼리 파라미터를 오프셋/리밋 쌍으로 변환하고, 전체 행
//! 수에서 전체 페이지 수를 유도합니다.
//!
//! 0 이하의 `page`/`size`는 1로 끌어올립니다. 원래 계약은 이를 검증하지
//! 않아 음수 오프셋이 가능했으나, 여기서는 안전한 쪽으로 재현하고 그
//! 편차를 문서화합니다 (DESIGN.md 참고). `size`의 상한은 원래 계약대로
//! 두지 않습니다.

use serde::Serialize;

/// 페이지 기본값
pub const DEFAULT_PAGE: i64 = 1;
/// 페이지 크기 기본값
pub const DEFAULT_SIZE: i64 = 10;

/// 검증이 끝난 페이지 요청
///
/// 불변 조건: `page ≥ 1`, `size ≥ 1`, `offset = (page - 1) * size ≥ 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}

impl PageRequest {
    /// 원시 쿼리 파라미터에서 페이지 요청을 만듭니다
    ///
    /// 없거나 숫자로 파싱되지 않는 값은 기본값(`page=1`, `size=10`)으로
    /// 대체되고, 0 이하의 값은 1로 끌어올립니다.
    pub fn from_params(page: Option<&str>, size: Option<&str>) -> Self {
        Self {
            page: parse_or(page, DEFAULT_PAGE),
            size: parse_or(size, DEFAULT_SIZE),
        }
    }

    /// 데이터 쿼리에 사용할 오프셋
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.size
    }

    /// 데이터 쿼리에 사용할 리밋
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// 전체 행 수에서 전체 페이지 수를 유도합니다
    ///
    /// `ceil(total_count / size)`이며, `total_count = 0`이면 0입니다.
    pub fn total_pages(&self, total_count: i64) -> i64 {
        if total_count <= 0 {
            return 0;
        }
        (total_count + self.size - 1) / self.size
    }
}

fn parse_or(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
        .max(1)
}

/// 페이지네이션이 적용된 목록 조회 결과
///
/// 불변 조건: `items.len() ≤ size`, `total_pages = ceil(total_count / size)`.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub size: i64,
}

impl<T> PageResult<T> {
    /// 카운트 쿼리와 데이터 쿼리 결과에서 페이지 결과를 조립합니다
    pub fn assemble(items: Vec<T>, total_count: i64, page: &PageRequest) -> Self {
        Self {
            items,
            total_count,
            total_pages: page.total_pages(total_count),
            current_page: page.page,
            size: page.size,
        }
    }
}
