//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버 관련 설정
//! - [`auth_config`] - JWT 토큰, 비밀번호 해싱 관련 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 서명 키와 토큰 수명은 시작 시점 필수값 — 누락 시 요청 단위 에러가
//!   아니라 부팅 실패로 처리
//! - 런타임 설정값 파싱 오류 처리

pub mod auth_config;
pub mod data_config;

pub use auth_config::{JwtConfig, PasswordConfig};
pub use data_config::{DatabaseConfig, ServerConfig};
