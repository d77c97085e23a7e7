pub mod auth;
pub mod product;
pub mod shop;
pub mod user;

pub use auth::AuthAccount;
pub use product::Product;
pub use shop::Shop;
pub use user::User;
