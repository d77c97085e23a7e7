//! 상점 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Shop;

/// `GET /shops` 쿼리 파라미터
///
/// 상점 목록은 페이지 크기 파라미터로 `limit`이 아닌 `size`를 받습니다
/// (기존 계약 유지).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopListQuery {
    pub shop_name: Option<String>,
    pub admin_email: Option<String>,
    pub product_name: Option<String>,
    pub stock: Option<String>,
    pub user_name: Option<String>,
    pub size: Option<String>,
    pub page: Option<String>,
}

/// 상점 생성 요청
///
/// 소유자는 항상 인증된 주체에서 유도됩니다. 본문에 `userId`가 있어도
/// 역직렬화에서 버려집니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShopRequest {
    #[validate(length(min = 1, max = 200, message = "Shop name is required"))]
    pub name: String,

    #[validate(email(message = "A valid admin email address is required"))]
    pub admin_email: String,
}

/// 상점 수정 요청 — 제공된 필드만 변경됩니다
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShopRequest {
    #[validate(length(min = 1, max = 200, message = "Shop name cannot be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "A valid admin email address is required"))]
    pub admin_email: Option<String>,
}

/// 응답의 소유자 요약
#[derive(Debug, Clone, Serialize)]
pub struct OwnerSummary {
    pub name: String,
}

/// 응답의 상품 요약
#[derive(Debug, Clone, Serialize)]
pub struct ShopProductSummary {
    pub name: String,
    pub images: Option<Vec<String>>,
    pub stock: i32,
    pub price: i64,
}

/// 목록/단건 응답의 상점 항목 — 소유자와 상품을 포함
#[derive(Debug, Clone, Serialize)]
pub struct ShopWithRelations {
    #[serde(flatten)]
    pub shop: Shop,
    pub user: OwnerSummary,
    pub products: Vec<ShopProductSummary>,
}

/// 상점 목록 전용 페이지네이션 블록
///
/// 상점 목록 응답은 `pagination: {page, size, totalPages}` 형태를
/// 사용합니다 (기존 계약 유지).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPagination {
    pub page: i64,
    pub size: i64,
    pub total_pages: i64,
}
