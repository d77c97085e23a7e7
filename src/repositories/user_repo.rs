//! # 사용자 리포지토리

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};

use crate::domain::dto::users::UpdateUserRequest;
use crate::domain::entities::User;
use crate::errors::AppResult;
use crate::query::filter::FilterSpec;
use crate::query::PageRequest;
use crate::repositories::sql::{push_filters, push_page};

/// 사용자 데이터 액세스 trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 필터를 만족하는 전체 행 수
    async fn count(&self, filters: &FilterSpec) -> AppResult<i64>;

    /// 필터와 페이지를 적용한 목록 조회
    async fn find_page(&self, filters: &FilterSpec, page: &PageRequest)
        -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// 제공된 필드만 변경. 해당 id가 없으면 `None`
    async fn update(&self, id: i32, changes: &UpdateUserRequest) -> AppResult<Option<User>>;

    /// 해당 id의 행만 삭제. 삭제된 행이 있으면 `true`
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// PostgreSQL 사용자 리포지토리
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn count(&self, filters: &FilterSpec) -> AppResult<i64> {
        let mut builder = QueryBuilder::new("SELECT count(*) FROM users u WHERE 1=1");
        push_filters(&mut builder, "u", filters);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn find_page(
        &self,
        filters: &FilterSpec,
        page: &PageRequest,
    ) -> AppResult<Vec<User>> {
        let mut builder = QueryBuilder::new("SELECT u.* FROM users u WHERE 1=1");
        push_filters(&mut builder, "u", filters);
        push_page(&mut builder, "u", page);

        let users = builder
            .build_query_as::<User>()
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn update(&self, id: i32, changes: &UpdateUserRequest) -> AppResult<Option<User>> {
        // updated_at을 항상 갱신하므로 SET 절이 비는 일은 없다
        let mut builder = QueryBuilder::new("UPDATE users SET updated_at = now()");

        if let Some(name) = &changes.name {
            builder.push(", name = ");
            builder.push_bind(name.clone());
        }
        if let Some(age) = changes.age {
            builder.push(", age = ");
            builder.push_bind(age);
        }
        if let Some(role) = &changes.role {
            builder.push(", role = ");
            builder.push_bind(role.clone());
        }
        if let Some(address) = &changes.address {
            builder.push(", address = ");
            builder.push_bind(address.clone());
        }
        if let Some(shop_id) = changes.shop_id {
            builder.push(", shop_id = ");
            builder.push_bind(shop_id);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" RETURNING *");

        let user = builder
            .build_query_as::<User>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
