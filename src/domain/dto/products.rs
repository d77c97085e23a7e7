//! 상품 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Product, Shop};

/// `GET /products` 쿼리 파라미터
///
/// 모든 필드는 느슨하게 타입된 문자열로 받고, 정책표에 따라
/// [`crate::query::filter::for_products`]가 술어로 변환합니다.
/// 알 수 없는 파라미터는 역직렬화에서 조용히 버려집니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    pub product_name: Option<String>,
    pub stock: Option<String>,
    pub shop_name: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// 상품 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Product name is required"))]
    pub name: String,

    pub images: Option<Vec<String>>,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i32,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: i64,

    pub shop_id: i32,
}

/// 상품 수정 요청 — 제공된 필드만 변경됩니다
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Product name cannot be empty"))]
    pub name: Option<String>,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: Option<i32>,

    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: Option<i64>,
}

/// 목록 응답의 상점 요약
#[derive(Debug, Clone, Serialize)]
pub struct ShopSummary {
    pub id: i32,
    pub name: String,
}

/// 목록 응답의 상품 항목
#[derive(Debug, Clone, Serialize)]
pub struct ProductListItem {
    pub id: i32,
    pub name: String,
    pub stock: i32,
    pub price: i64,
    pub shop: ShopSummary,
}

/// 단건 조회 응답 — 상품 전체 필드와 소속 상점
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithShop {
    #[serde(flatten)]
    pub product: Product,
    pub shop: Shop,
}
