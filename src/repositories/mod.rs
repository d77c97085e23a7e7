//! 데이터 액세스 계층
//!
//! 리소스별 리포지토리 trait과 PostgreSQL 구현을 제공합니다.
//! 서비스는 trait 객체(`Arc<dyn …Repository>`)로만 리포지토리를 보므로,
//! 테스트에서는 인메모리 구현으로 대체할 수 있습니다.
//!
//! 동시 요청 간의 원자성은 전적으로 저장소의 트랜잭션 격리에
//! 위임합니다. 이 계층은 재시도하지 않으며, 실패는 그대로 위로
//! 전파됩니다.

pub mod auth_repo;
pub mod product_repo;
pub mod shop_repo;
pub mod sql;
pub mod user_repo;

pub use auth_repo::{AuthRepository, AuthWithUser, PgAuthRepository};
pub use product_repo::{PgProductRepository, ProductListRow, ProductRepository};
pub use shop_repo::{PgShopRepository, ShopOwnerRow, ShopRepository};
pub use user_repo::{PgUserRepository, UserRepository};
