//! Auth Account Entity
//!
//! 로그인 자격 증명 엔티티입니다. 이메일과 해시된 비밀번호를 보관하며
//! 사용자 프로필과 1:1로 연결됩니다. 비밀번호 해시는 직렬화에서
//! 제외되어 응답에 노출되지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 인증 계정 엔티티
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuthAccount {
    pub id: i32,
    /// 로그인 이메일 (unique)
    pub email: String,
    /// bcrypt 해시 — 응답 직렬화에서 제외
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 연결된 사용자 프로필 ID
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
