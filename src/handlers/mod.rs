//! HTTP 핸들러 계층
//!
//! 요청 역직렬화/검증과 응답 봉투 조립만 담당합니다. 비즈니스 로직은
//! 서비스 계층에 있습니다.

pub mod auth;
pub mod products;
pub mod shops;
pub mod users;
