//! # 상품 HTTP 핸들러
//!
//! 상품 CRUD 엔드포인트입니다. 모든 라우트는 인증 미들웨어 뒤에
//! 있습니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/products` | 목록 조회 (필터/페이지네이션) | 200 OK |
//! | `GET` | `/products/{id}` | 단건 조회 | 200 OK |
//! | `POST` | `/products` | 생성 | 201 Created |
//! | `PUT` | `/products/{id}` | 수정 | 200 OK |
//! | `DELETE` | `/products/{id}` | 삭제 | 200 OK |

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::products::{
    CreateProductRequest, ProductListQuery, UpdateProductRequest,
};
use crate::domain::dto::ApiResponse;
use crate::errors::AppError;
use crate::services::ProductService;

/// 상품 목록 조회 핸들러
///
/// `productName`(부분 일치), `stock`(완전 일치), `shopName`(상위 상점
/// 부분 일치) 필터와 `page`/`limit` 페이지네이션을 지원합니다.
///
/// # 엔드포인트
///
/// `GET /api/v1/products?productName=shirt&stock=5&page=2&limit=5`
#[get("")]
pub async fn list_products(
    service: web::Data<ProductService>,
    query: web::Query<ProductListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service.list(&query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Success get products data",
        json!({
            "totalData": page.total_count,
            "totalPages": page.total_pages,
            "currentPage": page.current_page,
            "products": page.items,
        }),
    )))
}

/// 상품 단건 조회 핸들러 — 소속 상점 포함
#[get("/{id}")]
pub async fn get_product(
    service: web::Data<ProductService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let product = service.get(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Success get product data",
        product,
    )))
}

/// 상품 생성 핸들러
///
/// 존재하지 않는 `shopId`는 저장소의 외래키 제약이 거절하고 400으로
/// 응답됩니다.
#[post("")]
pub async fn create_product(
    service: web::Data<ProductService>,
    payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let product = service.create(&payload).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Success create new product",
        product,
    )))
}

/// 상품 수정 핸들러 — 제공된 필드만 변경됩니다
#[put("/{id}")]
pub async fn update_product(
    service: web::Data<ProductService>,
    id: web::Path<i32>,
    payload: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let product = service.update(id.into_inner(), &payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Success update product", product)))
}

/// 상품 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_product(
    service: web::Data<ProductService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Success delete product")))
}
