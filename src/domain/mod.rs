//! 도메인 모델 모듈
//!
//! 엔티티, 요청/응답 DTO, 인증 주체를 정의합니다.

pub mod auth;
pub mod dto;
pub mod entities;
