//! PostgreSQL 연결 모듈
//!
//! 커넥션 풀을 생성합니다. 풀은 `Clone`이 저렴하므로 리포지토리마다
//! 복제해 넘깁니다.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::errors::{AppError, AppResult};

/// 설정에 따라 PostgreSQL 커넥션 풀을 생성합니다
///
/// # Errors
///
/// * `AppError::DatabaseError` - 연결 실패
pub async fn connect(config: &DatabaseConfig) -> AppResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .map_err(|e| AppError::DatabaseError(format!("failed to connect to PostgreSQL: {}", e)))
}
