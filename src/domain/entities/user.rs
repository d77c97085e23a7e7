//! User Entity
//!
//! 시스템 사용자의 프로필 엔티티입니다. 로그인 자격 증명은
//! [`super::auth::AuthAccount`]에 분리되어 있습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    /// 사용자 이름
    pub name: String,
    /// 나이
    pub age: Option<i32>,
    /// 역할 (기본값 "user")
    pub role: String,
    /// 주소
    pub address: Option<String>,
    /// 소속 상점 (없을 수 있음)
    pub shop_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
