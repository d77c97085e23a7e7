//! 데이터베이스 및 서버 설정
//!
//! HTTP 바인딩 주소와 PostgreSQL 연결 설정을 환경 변수에서 읽어옵니다.

use std::env;

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 바인딩 호스트를 반환합니다 (기본값: `127.0.0.1`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 서버 바인딩 포트를 반환합니다 (기본값: `8080`)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080)
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// PostgreSQL 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL 연결 URL
    pub url: String,
    /// 커넥션 풀 최대 연결 수
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// 환경 변수에서 데이터베이스 설정을 로드합니다
    ///
    /// # Environment Variables
    ///
    /// * `DATABASE_URL` - PostgreSQL 연결 문자열 (필수)
    /// * `DATABASE_MAX_CONNECTIONS` - 커넥션 풀 크기 (기본값: 10)
    pub fn from_env() -> Result<Self, crate::errors::AppError> {
        let url = env::var("DATABASE_URL").map_err(|_| {
            crate::errors::AppError::ConfigurationError("DATABASE_URL must be set".to_string())
        })?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(10);

        Ok(Self {
            url,
            max_connections,
        })
    }
}
