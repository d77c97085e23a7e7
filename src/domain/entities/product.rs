//! Product Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 상품 엔티티
///
/// 정확히 하나의 상점에 속합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    /// 상품 이미지 URL 목록
    pub images: Option<Vec<String>>,
    pub stock: i32,
    pub price: i64,
    /// 소속 상점 ID
    pub shop_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
