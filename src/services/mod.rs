//! 비즈니스 로직 계층
//!
//! 핸들러와 리포지토리 사이에서 도메인 규칙을 적용합니다. 서비스는
//! 리포지토리 trait 객체를 생성자로 주입받아 `web::Data`로 공유됩니다.

pub mod auth;
pub mod products;
pub mod shops;
pub mod users;

pub use auth::{AuthService, TokenService};
pub use products::ProductService;
pub use shops::ShopService;
pub use users::UserService;
