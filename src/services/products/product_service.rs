//! 상품 서비스
//!
//! 상품 목록/단건 조회와 생성/수정/삭제의 비즈니스 로직입니다.
//! 목록 조회는 카운트 쿼리와 데이터 쿼리를 짝지어 실행하고 같은
//! 술어 집합을 공유합니다.

use std::sync::Arc;

use crate::domain::dto::products::{
    CreateProductRequest, ProductListItem, ProductListQuery, ProductWithShop, ShopSummary,
    UpdateProductRequest,
};
use crate::domain::entities::Product;
use crate::errors::{AppError, AppResult};
use crate::query::filter::for_products;
use crate::query::{PageRequest, PageResult};
use crate::repositories::ProductRepository;

/// 상품 서비스
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// 필터/페이지네이션이 적용된 상품 목록을 조회합니다
    pub async fn list(&self, query: &ProductListQuery) -> AppResult<PageResult<ProductListItem>> {
        let filters = for_products(
            query.product_name.as_deref(),
            query.stock.as_deref(),
            query.shop_name.as_deref(),
        );
        let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());

        let total = self.repo.count(&filters).await?;
        let rows = self.repo.find_page(&filters, &page).await?;

        let items = rows
            .into_iter()
            .map(|row| ProductListItem {
                id: row.id,
                name: row.name,
                stock: row.stock,
                price: row.price,
                shop: ShopSummary {
                    id: row.shop_id,
                    name: row.shop_name,
                },
            })
            .collect();

        Ok(PageResult::assemble(items, total, &page))
    }

    /// 상품 단건 조회 — 소속 상점 포함
    pub async fn get(&self, id: i32) -> AppResult<ProductWithShop> {
        let (product, shop) = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Data not found".to_string()))?;

        Ok(ProductWithShop { product, shop })
    }

    pub async fn create(&self, request: &CreateProductRequest) -> AppResult<Product> {
        self.repo.create(request).await
    }

    /// 상품 수정 — 대상이 없으면 아무것도 바꾸지 않고 404
    pub async fn update(&self, id: i32, changes: &UpdateProductRequest) -> AppResult<Product> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound("Data not found".to_string()))
    }

    /// 상품 삭제 — 대상이 없으면 아무것도 지우지 않고 404
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("Data not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::domain::entities::Shop;
    use crate::query::filter::ProductFilters;
    use crate::repositories::ProductListRow;

    /// 정책표의 술어를 메모리에서 평가하는 인메모리 리포지토리
    struct InMemoryProductRepository {
        rows: Mutex<Vec<Product>>,
        shop_name: String,
    }

    impl InMemoryProductRepository {
        fn new(rows: Vec<Product>) -> Self {
            Self {
                rows: Mutex::new(rows),
                shop_name: "Acme Store".to_string(),
            }
        }

        fn matching(&self, filters: &ProductFilters) -> Vec<Product> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| {
                    filters.product.filters().iter().all(|f| match f.column {
                        "name" => f.predicate.matches_text(&p.name),
                        "stock" => f.predicate.matches_int(p.stock as i64),
                        _ => false,
                    }) && filters
                        .shop
                        .filters()
                        .iter()
                        .all(|f| f.predicate.matches_text(&self.shop_name))
                })
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl ProductRepository for InMemoryProductRepository {
        async fn count(&self, filters: &ProductFilters) -> AppResult<i64> {
            Ok(self.matching(filters).len() as i64)
        }

        async fn find_page(
            &self,
            filters: &ProductFilters,
            page: &PageRequest,
        ) -> AppResult<Vec<ProductListRow>> {
            Ok(self
                .matching(filters)
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .map(|p| ProductListRow {
                    id: p.id,
                    name: p.name,
                    stock: p.stock,
                    price: p.price,
                    shop_id: p.shop_id,
                    shop_name: self.shop_name.clone(),
                })
                .collect())
        }

        async fn find_by_id(&self, id: i32) -> AppResult<Option<(Product, Shop)>> {
            let now = Utc::now();
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .map(|p| {
                    let shop = Shop {
                        id: p.shop_id,
                        name: self.shop_name.clone(),
                        admin_email: "admin@acme.test".to_string(),
                        user_id: 1,
                        created_at: now,
                        updated_at: now,
                    };
                    (p, shop)
                }))
        }

        async fn create(&self, request: &CreateProductRequest) -> AppResult<Product> {
            let now = Utc::now();
            let mut rows = self.rows.lock().unwrap();
            let product = Product {
                id: rows.iter().map(|p| p.id).max().unwrap_or(0) + 1,
                name: request.name.clone(),
                images: request.images.clone(),
                stock: request.stock,
                price: request.price,
                shop_id: request.shop_id,
                created_at: now,
                updated_at: now,
            };
            rows.push(product.clone());
            Ok(product)
        }

        async fn update(
            &self,
            id: i32,
            changes: &UpdateProductRequest,
        ) -> AppResult<Option<Product>> {
            let mut rows = self.rows.lock().unwrap();
            let Some(product) = rows.iter_mut().find(|p| p.id == id) else {
                return Ok(None);
            };
            if let Some(name) = &changes.name {
                product.name = name.clone();
            }
            if let Some(stock) = changes.stock {
                product.stock = stock;
            }
            if let Some(price) = changes.price {
                product.price = price;
            }
            Ok(Some(product.clone()))
        }

        async fn delete(&self, id: i32) -> AppResult<bool> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|p| p.id != id);
            Ok(rows.len() < before)
        }
    }

    fn product(id: i32, name: &str, stock: i32) -> Product {
        let now = Utc::now();
        Product {
            id,
            name: name.to_string(),
            images: None,
            stock,
            price: 1000,
            shop_id: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn service_with(rows: Vec<Product>) -> ProductService {
        ProductService::new(Arc::new(InMemoryProductRepository::new(rows)))
    }

    #[actix_web::test]
    async fn second_page_of_twelve_rows_with_limit_five_has_three_pages() {
        let rows = (1..=12).map(|i| product(i, &format!("Item {}", i), 5)).collect();
        let products = service_with(rows);
        let query = ProductListQuery {
            limit: Some("5".to_string()),
            page: Some("2".to_string()),
            ..Default::default()
        };

        let result = products.list(&query).await.unwrap();

        assert_eq!(result.total_count, 12);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.current_page, 2);
        assert_eq!(result.items.len(), 5);
        assert_eq!(result.items[0].id, 6);
    }

    #[actix_web::test]
    async fn name_filter_matches_case_insensitive_substrings() {
        let rows = vec![
            product(1, "Blue Shirt", 5),
            product(2, "Red Pants", 5),
            product(3, "shirtdress", 5),
        ];
        let products = service_with(rows);
        let query = ProductListQuery {
            product_name: Some("SHIRT".to_string()),
            ..Default::default()
        };

        let result = products.list(&query).await.unwrap();

        assert_eq!(result.total_count, 2);
        assert_eq!(result.items.len(), 2);
    }

    #[actix_web::test]
    async fn non_numeric_stock_filter_yields_an_empty_page_not_an_error() {
        let products = service_with(vec![product(1, "Item", 5)]);
        let query = ProductListQuery {
            stock: Some("lots".to_string()),
            ..Default::default()
        };

        let result = products.list(&query).await.unwrap();

        assert_eq!(result.total_count, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.items.is_empty());
    }

    #[actix_web::test]
    async fn get_missing_product_is_not_found() {
        let products = service_with(vec![]);

        let result = products.get(99).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn update_missing_product_mutates_nothing() {
        let products = service_with(vec![product(1, "Item", 5)]);
        let changes = UpdateProductRequest {
            stock: Some(99),
            ..Default::default()
        };

        let result = products.update(2, &changes).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        let untouched = products.get(1).await.unwrap();
        assert_eq!(untouched.product.stock, 5);
    }

    #[actix_web::test]
    async fn delete_removes_only_the_target_row() {
        let products = service_with(vec![product(1, "Keep", 5), product(2, "Drop", 5)]);

        products.delete(2).await.unwrap();

        assert!(products.get(1).await.is_ok());
        assert!(matches!(
            products.get(2).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            products.delete(2).await,
            Err(AppError::NotFound(_))
        ));
    }
}
