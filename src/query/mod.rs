//! 목록 조회 계약의 핵심 모듈
//!
//! 느슨하게 타입된 쿼리 파라미터를 구조화된 술어([`filter`])와
//! 오프셋/리밋 쌍([`pagination`])으로 변환합니다. 두 모듈 모두 요청 단위로
//! 생성되어 쿼리 실행 후 폐기되는 값 타입만 다룹니다.

pub mod filter;
pub mod pagination;

pub use filter::{FieldFilter, FilterSpec, Predicate};
pub use pagination::{PageRequest, PageResult};
