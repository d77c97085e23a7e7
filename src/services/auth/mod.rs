//! 인증 도메인 서비스

pub mod auth_service;
pub mod credential;
pub mod token_service;

pub use auth_service::AuthService;
pub use token_service::{TokenClaims, TokenService};
