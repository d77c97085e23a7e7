//! # 사용자 HTTP 핸들러
//!
//! 사용자 프로필 조회/수정/삭제 엔드포인트입니다. 사용자 생성은
//! 회원가입(`POST /auth/register`)으로만 이루어집니다. 모든 라우트는
//! 인증 미들웨어 뒤에 있습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 목록 조회 (필터/페이지네이션) | 200 OK |
//! | `GET` | `/users/{id}` | 단건 조회 | 200 OK |
//! | `PUT` | `/users/{id}` | 수정 | 200 OK |
//! | `DELETE` | `/users/{id}` | 삭제 | 200 OK |

use actix_web::{delete, get, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::users::{UpdateUserRequest, UserListQuery};
use crate::domain::dto::ApiResponse;
use crate::errors::AppError;
use crate::services::UserService;

/// 사용자 목록 조회 핸들러
///
/// `name`/`address`는 부분 일치, `age`/`role`/`shopId`는 완전 일치
/// 필터입니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/users?role=admin&age=30&page=1&limit=10`
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<UserListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.list(&query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Success get users data",
        json!({
            "totalData": page.total_count,
            "totalPages": page.total_pages,
            "currentPage": page.current_page,
            "users": page.items,
        }),
    )))
}

/// 사용자 단건 조회 핸들러
#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let user = service.get(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Success get user data", user)))
}

/// 사용자 수정 핸들러 — 제공된 필드만 변경됩니다
#[put("/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<i32>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = service.update(id.into_inner(), &payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Successfully updated user", user)))
}

/// 사용자 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Successfully deleted user")))
}
