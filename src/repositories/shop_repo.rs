//! # 상점 리포지토리
//!
//! 상점 목록은 소유자(users)를 조인해 한 번에 가져오고, 하위 상품
//! 필터는 `EXISTS` 서브쿼리로 적용합니다. 페이지에 포함된 상점들의
//! 상품은 별도 쿼리(`shop_id = ANY(...)`)로 일괄 조회합니다.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::dto::shops::{CreateShopRequest, UpdateShopRequest};
use crate::domain::entities::{Product, Shop};
use crate::errors::AppResult;
use crate::query::filter::{FilterSpec, ShopFilters};
use crate::query::PageRequest;
use crate::repositories::sql::{push_filters, push_page};

/// 목록/단건 조회용 행 — 상점과 소유자 이름
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShopOwnerRow {
    #[sqlx(flatten)]
    pub shop: Shop,
    pub owner_name: String,
}

/// 상점 데이터 액세스 trait
#[async_trait]
pub trait ShopRepository: Send + Sync {
    /// 필터를 만족하는 전체 행 수
    async fn count(&self, filters: &ShopFilters) -> AppResult<i64>;

    /// 필터와 페이지를 적용한 목록 조회
    async fn find_page(
        &self,
        filters: &ShopFilters,
        page: &PageRequest,
    ) -> AppResult<Vec<ShopOwnerRow>>;

    /// 주어진 상점들에 속한 상품을 일괄 조회합니다
    ///
    /// `filters`는 상점 선택에 쓰인 것과 같은 상품 술어입니다. 임베드되는
    /// 상품 목록도 같은 술어로 좁혀집니다.
    async fn products_for_shops(
        &self,
        shop_ids: &[i32],
        filters: &FilterSpec,
    ) -> AppResult<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<ShopOwnerRow>>;

    /// 상점 생성 — 소유자는 호출자가 인증된 주체로부터 넘겨줍니다
    async fn create(&self, request: &CreateShopRequest, owner_id: i32) -> AppResult<Shop>;

    /// 제공된 필드만 변경. 해당 id가 없으면 `None`
    async fn update(&self, id: i32, changes: &UpdateShopRequest) -> AppResult<Option<Shop>>;

    /// 해당 id의 행만 삭제. 삭제된 행이 있으면 `true`
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// PostgreSQL 상점 리포지토리
pub struct PgShopRepository {
    pool: PgPool,
}

impl PgShopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 카운트/데이터 쿼리가 공유하는 필터 절을 밀어 넣습니다
    ///
    /// 상품 필터가 하나라도 있으면 `EXISTS` 서브쿼리가 붙습니다.
    /// 필터 없는 요청은 서브쿼리 비용을 전혀 내지 않습니다.
    fn push_list_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &ShopFilters) {
        push_filters(builder, "s", &filters.shop);
        push_filters(builder, "u", &filters.owner);

        if !filters.product.is_empty() {
            builder.push(" AND EXISTS (SELECT 1 FROM products p WHERE p.shop_id = s.id");
            push_filters(builder, "p", &filters.product);
            builder.push(")");
        }
    }
}

#[async_trait]
impl ShopRepository for PgShopRepository {
    async fn count(&self, filters: &ShopFilters) -> AppResult<i64> {
        let mut builder = QueryBuilder::new(
            "SELECT count(*) FROM shops s JOIN users u ON u.id = s.user_id WHERE 1=1",
        );
        Self::push_list_filters(&mut builder, filters);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn find_page(
        &self,
        filters: &ShopFilters,
        page: &PageRequest,
    ) -> AppResult<Vec<ShopOwnerRow>> {
        let mut builder = QueryBuilder::new(
            "SELECT s.*, u.name AS owner_name \
             FROM shops s JOIN users u ON u.id = s.user_id WHERE 1=1",
        );
        Self::push_list_filters(&mut builder, filters);
        push_page(&mut builder, "s", page);

        let rows = builder
            .build_query_as::<ShopOwnerRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn products_for_shops(
        &self,
        shop_ids: &[i32],
        filters: &FilterSpec,
    ) -> AppResult<Vec<Product>> {
        if shop_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = QueryBuilder::new("SELECT p.* FROM products p WHERE p.shop_id = ANY(");
        builder.push_bind(shop_ids.to_vec());
        builder.push(")");
        push_filters(&mut builder, "p", filters);
        builder.push(" ORDER BY p.id");

        let products = builder
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<ShopOwnerRow>> {
        let row = sqlx::query_as::<_, ShopOwnerRow>(
            "SELECT s.*, u.name AS owner_name \
             FROM shops s JOIN users u ON u.id = s.user_id WHERE s.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, request: &CreateShopRequest, owner_id: i32) -> AppResult<Shop> {
        let shop = sqlx::query_as::<_, Shop>(
            "INSERT INTO shops (name, admin_email, user_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&request.name)
        .bind(&request.admin_email)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(shop)
    }

    async fn update(&self, id: i32, changes: &UpdateShopRequest) -> AppResult<Option<Shop>> {
        // updated_at을 항상 갱신하므로 SET 절이 비는 일은 없다
        let mut builder = QueryBuilder::new("UPDATE shops SET updated_at = now()");

        if let Some(name) = &changes.name {
            builder.push(", name = ");
            builder.push_bind(name.clone());
        }
        if let Some(admin_email) = &changes.admin_email {
            builder.push(", admin_email = ");
            builder.push_bind(admin_email.clone());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" RETURNING *");

        let shop = builder
            .build_query_as::<Shop>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(shop)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM shops WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
