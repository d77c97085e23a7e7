//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 모든 에러는 응답 봉투
//! `{status, message, isSuccess, data}` 형태의 JSON으로 변환됩니다.
//!
//! ## 에러 → HTTP 상태 코드 매핑
//!
//! | 에러 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError` | 400 Bad Request |
//! | `ConflictError` (저장소 제약 위반) | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `AuthenticationError` | 401 Unauthorized |
//! | 그 외 (`DatabaseError`, `ConfigurationError`, `InternalError`) | 500 |
//!
//! 500 계열 에러의 내부 상세는 로그에만 남기고, 클라이언트에게는
//! 일반화된 메시지만 전달합니다.

use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("{0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 저장소 제약 조건 위반 에러 (400 Bad Request)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// 시작 시점 설정 누락 에러 (500 Internal Server Error)
    #[error("{0}")]
    ConfigurationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출할 메시지
    ///
    /// 500 계열 에러는 내부 상세를 감추고 일반화된 메시지로 대체합니다.
    fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(detail)
            | AppError::ConfigurationError(detail)
            | AppError::InternalError(detail) => {
                log::error!("internal error: {}", detail);
                "An unexpected error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            // 제약 위반은 409가 아닌 400으로 응답한다 (기존 계약 유지)
            AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 응답 봉투 JSON으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "status": "Failed",
                "message": self.public_message(),
                "isSuccess": false,
                "data": null,
            }))
    }
}

impl From<sqlx::Error> for AppError {
    /// 저장소 에러를 에러 분류 체계로 변환
    ///
    /// 유니크/외래키/체크 제약 위반은 `ConflictError`로, 조회 결과 없음은
    /// `NotFound`로, 그 외는 `DatabaseError`로 매핑합니다.
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Data not found".to_string()),
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation() =>
            {
                AppError::ConflictError(db_err.message().to_string())
            }
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}

/// `validator` 검증 실패에서 첫 번째 메시지를 추출합니다
///
/// 클라이언트에게는 전체 에러 목록이 아닌 첫 번째 검증 메시지만 전달합니다.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid request data".to_string())
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(first_validation_message(&errors))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
