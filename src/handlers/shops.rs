//! # 상점 HTTP 핸들러
//!
//! 상점 CRUD 엔드포인트입니다. 모든 라우트는 인증 미들웨어 뒤에
//! 있습니다. 상점 생성의 소유자는 요청 본문이 아닌 인증된 주체에서
//! 옵니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/shops` | 목록 조회 (필터/페이지네이션) | 200 OK |
//! | `GET` | `/shops/{id}` | 단건 조회 | 200 OK |
//! | `POST` | `/shops` | 생성 | 201 Created |
//! | `PUT` | `/shops/{id}` | 수정 | 200 OK |
//! | `DELETE` | `/shops/{id}` | 삭제 | 200 OK |

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::shops::{
    CreateShopRequest, ShopListQuery, ShopPagination, UpdateShopRequest,
};
use crate::domain::dto::ApiResponse;
use crate::errors::AppError;
use crate::services::ShopService;

/// 상점 목록 조회 핸들러
///
/// 자체 필드(`shopName`, `adminEmail`) 외에 연관 레코드 필터도
/// 지원합니다. `productName`/`stock`은 해당 상품을 가진 상점을,
/// `userName`은 해당 소유자의 상점을 선택합니다. 페이지 크기
/// 파라미터는 `size`입니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/shops?shopName=acme&stock=3&page=1&size=10`
#[get("")]
pub async fn list_shops(
    service: web::Data<ShopService>,
    query: web::Query<ShopListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.list(&query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Successfully retrieved shop data",
        json!({
            "totalData": page.total_count,
            "shops": page.items,
            "pagination": ShopPagination {
                page: page.current_page,
                size: page.size,
                total_pages: page.total_pages,
            },
        }),
    )))
}

/// 상점 단건 조회 핸들러 — 소유자와 상품 포함
#[get("/{id}")]
pub async fn get_shop(
    service: web::Data<ShopService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let shop = service.get(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Successfully retrieved shop data",
        shop,
    )))
}

/// 상점 생성 핸들러
///
/// 소유자는 토큰의 주체로 고정됩니다. 본문으로 다른 소유자를 지정할
/// 수 없습니다.
#[post("")]
pub async fn create_shop(
    service: web::Data<ShopService>,
    principal: AuthenticatedUser,
    payload: web::Json<CreateShopRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let shop = service.create(&payload, &principal).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Successfully created new Shop",
        shop,
    )))
}

/// 상점 수정 핸들러 — 제공된 필드만 변경됩니다
#[put("/{id}")]
pub async fn update_shop(
    service: web::Data<ShopService>,
    id: web::Path<i32>,
    payload: web::Json<UpdateShopRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let shop = service.update(id.into_inner(), &payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Successfully updated shop", shop)))
}

/// 상점 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_shop(
    service: web::Data<ShopService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Successfully deleted shop")))
}
