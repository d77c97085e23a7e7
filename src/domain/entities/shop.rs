//! Shop Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 상점 엔티티
///
/// 정확히 한 명의 사용자가 소유합니다. `user_id`는 생성 시점에
/// 인증된 주체에서 유도되며 클라이언트 입력으로 바뀌지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: i32,
    pub name: String,
    /// 상점 관리자 연락 이메일
    pub admin_email: String,
    /// 소유자 사용자 ID
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
