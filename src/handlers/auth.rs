//! # 인증 HTTP 핸들러
//!
//! 로그인, 회원가입, 현재 사용자 조회 엔드포인트입니다.
//! 로그인/회원가입은 public, `/me`는 인증 미들웨어 뒤에 있습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/auth/login` | 로그인, 토큰 발급 | 200 OK |
//! | `POST` | `/auth/register` | 회원가입 | 201 Created |
//! | `GET` | `/auth/me` | 현재 인증된 주체 조회 | 200 OK |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::auth::{LoginRequest, RegisterRequest};
use crate::domain::dto::ApiResponse;
use crate::errors::AppError;
use crate::services::AuthService;

/// 로그인 핸들러
///
/// 이메일/비밀번호를 검증하고 세션 토큰을 발급합니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/auth/login`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "status": "Success",
///   "message": "Login successful",
///   "isSuccess": true,
///   "data": { "username": "Jane", "token": "eyJhbGciOi..." }
/// }
/// ```
///
/// ## 실패
///
/// * 404 - 해당 이메일의 계정 없음 (`User does not exist`)
/// * 401 - 비밀번호 불일치 (`Incorrect password`)
#[post("/login")]
pub async fn login(
    service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let data = service.login(&payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Login successful", data)))
}

/// 회원가입 핸들러
///
/// 사용자 프로필과 인증 계정을 함께 생성합니다. 이메일이 이미
/// 사용 중이면 400으로 거절됩니다.
#[post("/register")]
pub async fn register(
    service: web::Data<AuthService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let data = service.register(&payload).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Successfully registered", data)))
}

/// 현재 인증된 주체 조회 핸들러
///
/// 토큰 클레임에서 복원된 주체를 그대로 반환합니다. 저장소 조회는
/// 없습니다.
#[get("/me")]
pub async fn current_user(principal: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(ApiResponse::success("Success get current user", principal)))
}
