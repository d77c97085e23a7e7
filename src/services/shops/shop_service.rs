//! 상점 서비스
//!
//! 상점 목록/단건 조회와 생성/수정/삭제의 비즈니스 로직입니다.
//! 목록 조회는 소유자를 조인해 가져온 뒤, 페이지에 포함된 상점들의
//! 상품을 한 번의 추가 쿼리로 붙입니다. 상점 생성의 소유자는 항상
//! 인증된 주체에서 옵니다.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::dto::shops::{
    CreateShopRequest, OwnerSummary, ShopListQuery, ShopProductSummary, ShopWithRelations,
    UpdateShopRequest,
};
use crate::domain::entities::{Product, Shop};
use crate::errors::{AppError, AppResult};
use crate::query::filter::{for_shops, FilterSpec};
use crate::query::{PageRequest, PageResult};
use crate::repositories::{ShopOwnerRow, ShopRepository};

/// 상점 서비스
pub struct ShopService {
    repo: Arc<dyn ShopRepository>,
}

impl ShopService {
    pub fn new(repo: Arc<dyn ShopRepository>) -> Self {
        Self { repo }
    }

    /// 필터/페이지네이션이 적용된 상점 목록을 조회합니다
    ///
    /// 상품/소유자 필터는 상점 자체가 아닌 연관 레코드에 적용됩니다.
    /// 예를 들어 `stock=3`은 재고 3인 상품을 가진 상점들을 반환합니다.
    /// 임베드되는 상품 목록도 같은 상품 술어로 좁혀집니다. 상점이
    /// 선택되는 근거가 된 상품만 응답에 실립니다.
    pub async fn list(&self, query: &ShopListQuery) -> AppResult<PageResult<ShopWithRelations>> {
        let filters = for_shops(
            query.shop_name.as_deref(),
            query.admin_email.as_deref(),
            query.product_name.as_deref(),
            query.stock.as_deref(),
            query.user_name.as_deref(),
        );
        let page = PageRequest::from_params(query.page.as_deref(), query.size.as_deref());

        let total = self.repo.count(&filters).await?;
        let rows = self.repo.find_page(&filters, &page).await?;

        let shop_ids: Vec<i32> = rows.iter().map(|row| row.shop.id).collect();
        let mut by_shop = group_by_shop(
            self.repo
                .products_for_shops(&shop_ids, &filters.product)
                .await?,
        );

        let items = rows
            .into_iter()
            .map(|row| with_relations(row, &mut by_shop))
            .collect();

        Ok(PageResult::assemble(items, total, &page))
    }

    /// 상점 단건 조회 — 소유자와 상품 포함
    pub async fn get(&self, id: i32) -> AppResult<ShopWithRelations> {
        let row = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Shop not found".to_string()))?;

        // 단건 조회에는 상품 필터가 없으므로 전체 상품을 임베드한다
        let mut by_shop = group_by_shop(
            self.repo
                .products_for_shops(&[id], &FilterSpec::new())
                .await?,
        );

        Ok(with_relations(row, &mut by_shop))
    }

    /// 상점 생성 — 소유자는 인증된 주체로 고정됩니다
    ///
    /// 요청 본문의 소유자 지정은 역직렬화 단계에서 이미 버려졌습니다.
    pub async fn create(
        &self,
        request: &CreateShopRequest,
        principal: &AuthenticatedUser,
    ) -> AppResult<Shop> {
        self.repo.create(request, principal.user_id).await
    }

    /// 상점 수정 — 대상이 없으면 아무것도 바꾸지 않고 404
    pub async fn update(&self, id: i32, changes: &UpdateShopRequest) -> AppResult<Shop> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound("Shop not found".to_string()))
    }

    /// 상점 삭제 — 대상이 없으면 아무것도 지우지 않고 404
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("Shop not found".to_string()));
        }
        Ok(())
    }
}

fn group_by_shop(products: Vec<Product>) -> HashMap<i32, Vec<ShopProductSummary>> {
    let mut by_shop: HashMap<i32, Vec<ShopProductSummary>> = HashMap::new();
    for product in products {
        by_shop
            .entry(product.shop_id)
            .or_default()
            .push(ShopProductSummary {
                name: product.name,
                images: product.images,
                stock: product.stock,
                price: product.price,
            });
    }
    by_shop
}

fn with_relations(
    row: ShopOwnerRow,
    by_shop: &mut HashMap<i32, Vec<ShopProductSummary>>,
) -> ShopWithRelations {
    let products = by_shop.remove(&row.shop.id).unwrap_or_default();
    ShopWithRelations {
        user: OwnerSummary {
            name: row.owner_name,
        },
        products,
        shop: row.shop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    use crate::query::filter::ShopFilters;

    struct InMemoryShopRepository {
        shops: Mutex<Vec<(Shop, String)>>,
        products: Vec<Product>,
        last_owner: Mutex<Option<i32>>,
    }

    impl InMemoryShopRepository {
        fn new(shops: Vec<(Shop, String)>, products: Vec<Product>) -> Self {
            Self {
                shops: Mutex::new(shops),
                products,
                last_owner: Mutex::new(None),
            }
        }

        fn matching(&self, filters: &ShopFilters) -> Vec<(Shop, String)> {
            self.shops
                .lock()
                .unwrap()
                .iter()
                .filter(|(shop, owner_name)| {
                    let shop_ok = filters.shop.filters().iter().all(|f| match f.column {
                        "name" => f.predicate.matches_text(&shop.name),
                        "admin_email" => f.predicate.matches_text(&shop.admin_email),
                        _ => false,
                    });
                    let owner_ok = filters
                        .owner
                        .filters()
                        .iter()
                        .all(|f| f.predicate.matches_text(owner_name));
                    let product_ok = filters.product.is_empty()
                        || self.products.iter().any(|p| {
                            p.shop_id == shop.id
                                && filters.product.filters().iter().all(|f| match f.column {
                                    "name" => f.predicate.matches_text(&p.name),
                                    "stock" => f.predicate.matches_int(p.stock as i64),
                                    _ => false,
                                })
                        });
                    shop_ok && owner_ok && product_ok
                })
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl ShopRepository for InMemoryShopRepository {
        async fn count(&self, filters: &ShopFilters) -> AppResult<i64> {
            Ok(self.matching(filters).len() as i64)
        }

        async fn find_page(
            &self,
            filters: &ShopFilters,
            page: &PageRequest,
        ) -> AppResult<Vec<ShopOwnerRow>> {
            Ok(self
                .matching(filters)
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .map(|(shop, owner_name)| ShopOwnerRow { shop, owner_name })
                .collect())
        }

        async fn products_for_shops(
            &self,
            shop_ids: &[i32],
            filters: &FilterSpec,
        ) -> AppResult<Vec<Product>> {
            Ok(self
                .products
                .iter()
                .filter(|p| {
                    shop_ids.contains(&p.shop_id)
                        && filters.filters().iter().all(|f| match f.column {
                            "name" => f.predicate.matches_text(&p.name),
                            "stock" => f.predicate.matches_int(p.stock as i64),
                            _ => false,
                        })
                })
                .cloned()
                .collect())
        }

        async fn find_by_id(&self, id: i32) -> AppResult<Option<ShopOwnerRow>> {
            Ok(self
                .shops
                .lock()
                .unwrap()
                .iter()
                .find(|(shop, _)| shop.id == id)
                .cloned()
                .map(|(shop, owner_name)| ShopOwnerRow { shop, owner_name }))
        }

        async fn create(&self, request: &CreateShopRequest, owner_id: i32) -> AppResult<Shop> {
            *self.last_owner.lock().unwrap() = Some(owner_id);
            let now = Utc::now();
            let mut shops = self.shops.lock().unwrap();
            let shop = Shop {
                id: shops.iter().map(|(s, _)| s.id).max().unwrap_or(0) + 1,
                name: request.name.clone(),
                admin_email: request.admin_email.clone(),
                user_id: owner_id,
                created_at: now,
                updated_at: now,
            };
            shops.push((shop.clone(), "Owner".to_string()));
            Ok(shop)
        }

        async fn update(&self, id: i32, changes: &UpdateShopRequest) -> AppResult<Option<Shop>> {
            let mut shops = self.shops.lock().unwrap();
            let Some((shop, _)) = shops.iter_mut().find(|(s, _)| s.id == id) else {
                return Ok(None);
            };
            if let Some(name) = &changes.name {
                shop.name = name.clone();
            }
            if let Some(admin_email) = &changes.admin_email {
                shop.admin_email = admin_email.clone();
            }
            Ok(Some(shop.clone()))
        }

        async fn delete(&self, id: i32) -> AppResult<bool> {
            let mut shops = self.shops.lock().unwrap();
            let before = shops.len();
            shops.retain(|(s, _)| s.id != id);
            Ok(shops.len() < before)
        }
    }

    fn shop(id: i32, name: &str, owner: &str) -> (Shop, String) {
        let now = Utc::now();
        (
            Shop {
                id,
                name: name.to_string(),
                admin_email: format!("admin{}@example.com", id),
                user_id: id,
                created_at: now,
                updated_at: now,
            },
            owner.to_string(),
        )
    }

    fn product(id: i32, shop_id: i32, name: &str, stock: i32) -> Product {
        let now = Utc::now();
        Product {
            id,
            name: name.to_string(),
            images: None,
            stock,
            price: 500,
            shop_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn principal(user_id: i32) -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            user_id,
            username: "Jane".to_string(),
            email: "jane@example.com".to_string(),
        }
    }

    #[actix_web::test]
    async fn list_attaches_owner_and_products_to_each_shop() {
        let repo = InMemoryShopRepository::new(
            vec![shop(1, "Acme", "Jane"), shop(2, "Globex", "John")],
            vec![product(1, 1, "Widget", 3), product(2, 1, "Gadget", 7)],
        );
        let shops = ShopService::new(Arc::new(repo));

        let result = shops.list(&ShopListQuery::default()).await.unwrap();

        assert_eq!(result.total_count, 2);
        assert_eq!(result.items[0].user.name, "Jane");
        assert_eq!(result.items[0].products.len(), 2);
        assert!(result.items[1].products.is_empty());
    }

    #[actix_web::test]
    async fn product_filter_selects_shops_through_their_products() {
        let repo = InMemoryShopRepository::new(
            vec![shop(1, "Acme", "Jane"), shop(2, "Globex", "John")],
            vec![product(1, 1, "Widget", 3), product(2, 2, "Widget", 9)],
        );
        let shops = ShopService::new(Arc::new(repo));
        let query = ShopListQuery {
            stock: Some("3".to_string()),
            ..Default::default()
        };

        let result = shops.list(&query).await.unwrap();

        assert_eq!(result.total_count, 1);
        assert_eq!(result.items[0].shop.id, 1);
    }

    #[actix_web::test]
    async fn embedded_products_are_narrowed_by_the_product_filter() {
        let repo = InMemoryShopRepository::new(
            vec![shop(1, "Acme", "Jane")],
            vec![product(1, 1, "Book", 3), product(2, 1, "Widget", 7)],
        );
        let shops = ShopService::new(Arc::new(repo));
        let query = ShopListQuery {
            product_name: Some("book".to_string()),
            ..Default::default()
        };

        let result = shops.list(&query).await.unwrap();

        assert_eq!(result.total_count, 1);
        assert_eq!(result.items[0].products.len(), 1);
        assert_eq!(result.items[0].products[0].name, "Book");
    }

    #[actix_web::test]
    async fn create_takes_the_owner_from_the_principal() {
        let repo = Arc::new(InMemoryShopRepository::new(vec![], vec![]));
        let shops = ShopService::new(repo.clone());
        let request = CreateShopRequest {
            name: "Acme".to_string(),
            admin_email: "admin@acme.test".to_string(),
        };

        let created = shops.create(&request, &principal(7)).await.unwrap();

        assert_eq!(created.user_id, 7);
        assert_eq!(*repo.last_owner.lock().unwrap(), Some(7));
    }

    #[actix_web::test]
    async fn mutations_on_a_missing_shop_are_not_found() {
        let repo = InMemoryShopRepository::new(vec![shop(1, "Acme", "Jane")], vec![]);
        let shops = ShopService::new(Arc::new(repo));

        let update = shops.update(9, &UpdateShopRequest::default()).await;
        let delete = shops.delete(9).await;

        assert!(matches!(update, Err(AppError::NotFound(_))));
        assert!(matches!(delete, Err(AppError::NotFound(_))));
        assert!(shops.get(1).await.is_ok());
    }
}
