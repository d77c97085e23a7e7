//! 상점 백엔드 서비스
//!
//! Actix-web 기반의 멀티 리소스 REST 백엔드입니다. 사용자/상점/상품
//! CRUD와 필터링·페이지네이션 목록 조회, JWT 기반 세션 인증을
//! 제공합니다.
//!
//! # Features
//!
//! - **인증**: 이메일/비밀번호 로그인, bcrypt 해싱, JWT 세션 토큰
//! - **리소스 CRUD**: 사용자, 상점, 상품
//! - **목록 계약**: 리소스별 필드 정책표 기반 필터링과
//!   `page`/`limit`(또는 `size`) 페이지네이션
//! - **응답 봉투**: 모든 엔드포인트가 `{status, message, isSuccess, data}`
//!   형태로 응답
//! - **PostgreSQL**: sqlx 커넥션 풀 기반 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 역직렬화/검증, 응답 봉투 조립
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait 객체)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 의존성은 생성자 주입으로 흐릅니다. 리포지토리는
//! `Arc<dyn …Repository>`로 서비스에, 서비스는 `web::Data`로
//! 핸들러에 주입됩니다.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod query;
pub mod repositories;
pub mod routes;
pub mod services;
