//! # 상품 리포지토리
//!
//! 상품 엔티티의 데이터 액세스 계층입니다. 목록 조회는 소속 상점을
//! 조인하여 상점 필터를 같은 쿼리에서 적용합니다. 카운트 쿼리와
//! 데이터 쿼리는 동일한 술어 집합을 공유합니다.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::dto::products::{CreateProductRequest, UpdateProductRequest};
use crate::domain::entities::{Product, Shop};
use crate::errors::AppResult;
use crate::query::filter::ProductFilters;
use crate::query::PageRequest;
use crate::repositories::sql::{push_filters, push_page};

/// 목록 조회용 행 — 상품 요약과 소속 상점 요약
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductListRow {
    pub id: i32,
    pub name: String,
    pub stock: i32,
    pub price: i64,
    pub shop_id: i32,
    pub shop_name: String,
}

/// 상품 데이터 액세스 trait
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 필터를 만족하는 전체 행 수
    async fn count(&self, filters: &ProductFilters) -> AppResult<i64>;

    /// 필터와 페이지를 적용한 목록 조회
    async fn find_page(
        &self,
        filters: &ProductFilters,
        page: &PageRequest,
    ) -> AppResult<Vec<ProductListRow>>;

    /// 단건 조회 — 소속 상점 포함
    async fn find_by_id(&self, id: i32) -> AppResult<Option<(Product, Shop)>>;

    async fn create(&self, request: &CreateProductRequest) -> AppResult<Product>;

    /// 제공된 필드만 변경. 해당 id가 없으면 `None`
    async fn update(&self, id: i32, changes: &UpdateProductRequest) -> AppResult<Option<Product>>;

    /// 해당 id의 행만 삭제. 삭제된 행이 있으면 `true`
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// PostgreSQL 상품 리포지토리
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 카운트/데이터 쿼리가 공유하는 필터 절을 밀어 넣습니다
    fn push_list_filters(builder: &mut QueryBuilder<'_, Postgres>, filters: &ProductFilters) {
        push_filters(builder, "p", &filters.product);
        push_filters(builder, "s", &filters.shop);
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn count(&self, filters: &ProductFilters) -> AppResult<i64> {
        let mut builder = QueryBuilder::new(
            "SELECT count(*) FROM products p JOIN shops s ON s.id = p.shop_id WHERE 1=1",
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
        filters: &ProductFilters,
        page: &PageRequest,
    ) -> AppResult<Vec<ProductListRow>> {
        let mut builder = QueryBuilder::new(
            "SELECT p.id, p.name, p.stock, p.price, p.shop_id, s.name AS shop_name \
             FROM products p JOIN shops s ON s.id = p.shop_id WHERE 1=1",
        );
        Self::push_list_filters(&mut builder, filters);
        push_page(&mut builder, "p", page);

        let rows = builder
            .build_query_as::<ProductListRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<(Product, Shop)>> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(product) = product else {
            return Ok(None);
        };

        let shop = sqlx::query_as::<_, Shop>("SELECT * FROM shops WHERE id = $1")
            .bind(product.shop_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(Some((product, shop)))
    }

    async fn create(&self, request: &CreateProductRequest) -> AppResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, images, stock, price, shop_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&request.name)
        .bind(&request.images)
        .bind(request.stock)
        .bind(request.price)
        .bind(request.shop_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, id: i32, changes: &UpdateProductRequest) -> AppResult<Option<Product>> {
        // updated_at을 항상 갱신하므로 SET 절이 비는 일은 없다
        let mut builder = QueryBuilder::new("UPDATE products SET updated_at = now()");

        if let Some(name) = &changes.name {
            builder.push(", name = ");
            builder.push_bind(name.clone());
        }
        if let Some(stock) = changes.stock {
            builder.push(", stock = ");
            builder.push_bind(stock);
        }
        if let Some(price) = changes.price {
            builder.push(", price = ");
            builder.push_bind(price);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" RETURNING *");

        let product = builder
            .build_query_as::<Product>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
