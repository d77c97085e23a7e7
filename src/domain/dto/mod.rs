//! 요청/응답 DTO 모듈
//!
//! 클라이언트 입력의 역직렬화와 검증, 그리고 응답 봉투를 정의합니다.

pub mod auth;
pub mod envelope;
pub mod products;
pub mod shops;
pub mod users;

pub use envelope::ApiResponse;
