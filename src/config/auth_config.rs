//! # Authentication Configuration Module
//!
//! JWT 토큰과 비밀번호 해싱 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! 서명 키와 만료 시간은 시작 시점 불변 조건입니다. 둘 중 하나라도 누락되면
//! [`JwtConfig::from_env`]가 `ConfigurationError`를 반환하고 서비스는 부팅에
//! 실패합니다. 요청 처리 중에 설정 누락을 발견하는 일은 없습니다.

use std::env;

use crate::errors::AppError;

/// JWT 서명 설정
///
/// 세션 토큰 발급에 필요한 서명 키와 토큰 수명을 담습니다.
/// 부팅 시 한 번 로드되어 `TokenService`에 주입됩니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 서명 키
    pub secret: String,
    /// 발급 토큰의 수명 (시간 단위)
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 로드합니다
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - `JWT_SECRET` 또는
    ///   `JWT_EXPIRATION_HOURS`가 누락되었거나 비어 있는 경우
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var("JWT_SECRET")
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                AppError::ConfigurationError("JWT_SECRET must be set".to_string())
            })?;

        let expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .ok_or_else(|| {
                AppError::ConfigurationError(
                    "JWT_EXPIRATION_HOURS must be set to a positive integer".to_string(),
                )
            })?;

        Ok(Self {
            secret,
            expiration_hours,
        })
    }
}

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt cost를 반환합니다
    ///
    /// `BCRYPT_COST` 환경 변수로 조절할 수 있으며, 기본값은
    /// `bcrypt::DEFAULT_COST`입니다. 개발 환경에서는 낮은 값으로
    /// 해싱 시간을 줄일 수 있습니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(bcrypt::DEFAULT_COST)
    }
}
