//! 사용자 요청/응답 DTO

use serde::Deserialize;
use validator::Validate;

/// `GET /users` 쿼리 파라미터
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    pub name: Option<String>,
    pub age: Option<String>,
    pub role: Option<String>,
    pub address: Option<String>,
    pub shop_id: Option<String>,
    pub limit: Option<String>,
    pub page: Option<String>,
}

/// 사용자 수정 요청 — 제공된 필드만 변경됩니다
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i32>,

    #[validate(length(min = 1, max = 50, message = "Role cannot be empty"))]
    pub role: Option<String>,

    pub address: Option<String>,

    pub shop_id: Option<i32>,
}
