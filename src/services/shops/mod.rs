pub mod shop_service;

pub use shop_service::ShopService;
