//! # 인증 계정 리포지토리
//!
//! 자격 증명(auths)과 프로필(users)은 별도 테이블입니다. 회원가입은
//! 두 테이블에 걸친 삽입이므로 단일 트랜잭션으로 묶습니다.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::dto::auth::RegisterRequest;
use crate::domain::entities::{AuthAccount, User};
use crate::errors::AppResult;

/// 로그인 조회 결과 — 자격 증명과 연결된 프로필
#[derive(Debug, Clone)]
pub struct AuthWithUser {
    pub account: AuthAccount,
    pub user: User,
}

/// 인증 계정 데이터 액세스 trait
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// 이메일로 자격 증명과 프로필을 함께 조회합니다
    async fn find_by_email(&self, email: &str) -> AppResult<Option<AuthWithUser>>;

    /// 프로필과 자격 증명을 하나의 트랜잭션으로 생성합니다
    ///
    /// 둘 중 하나라도 실패하면(예: 이메일 중복) 아무것도 남지 않습니다.
    async fn create_account(
        &self,
        request: &RegisterRequest,
        password_hash: &str,
    ) -> AppResult<(User, AuthAccount)>;
}

/// PostgreSQL 인증 계정 리포지토리
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthRepository for PgAuthRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<AuthWithUser>> {
        let account =
            sqlx::query_as::<_, AuthAccount>("SELECT * FROM auths WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        let Some(account) = account else {
            return Ok(None);
        };

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(account.user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(Some(AuthWithUser { account, user }))
    }

    async fn create_account(
        &self,
        request: &RegisterRequest,
        password_hash: &str,
    ) -> AppResult<(User, AuthAccount)> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, age, role, address) \
             VALUES ($1, $2, 'user', $3) RETURNING *",
        )
        .bind(&request.name)
        .bind(request.age)
        .bind(&request.address)
        .fetch_one(&mut *tx)
        .await?;

        let account = sqlx::query_as::<_, AuthAccount>(
            "INSERT INTO auths (email, password_hash, user_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&request.email)
        .bind(password_hash)
        .bind(user.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((user, account))
    }
}
