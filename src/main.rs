//! 상점 백엔드 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! PostgreSQL 연결을 설정하고 JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use shop_service_backend::config::{DatabaseConfig, JwtConfig, ServerConfig};
use shop_service_backend::db;
use shop_service_backend::repositories::{
    PgAuthRepository, PgProductRepository, PgShopRepository, PgUserRepository,
};
use shop_service_backend::routes::configure_all_routes;
use shop_service_backend::services::{
    AuthService, ProductService, ShopService, TokenService, UserService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 상점 백엔드 서비스 시작중...");

    // 시작 시점 불변 조건: 서명 키와 토큰 수명이 없으면 부팅 실패
    let jwt_config = JwtConfig::from_env()
        .unwrap_or_else(|e| panic!("JWT 설정 로드 실패: {}", e));

    let db_config = DatabaseConfig::from_env()
        .unwrap_or_else(|e| panic!("데이터베이스 설정 로드 실패: {}", e));

    info!("📡 PostgreSQL 연결 중...");
    let pool = db::connect(&db_config)
        .await
        .unwrap_or_else(|e| panic!("데이터베이스 연결 실패: {}", e));
    info!("✅ PostgreSQL 연결 성공");

    // 의존성 조립: 리포지토리 → 서비스
    let token_service = web::Data::new(TokenService::new(&jwt_config));
    let auth_service = web::Data::new(AuthService::new(
        Arc::new(PgAuthRepository::new(pool.clone())),
        token_service.clone().into_inner(),
    ));
    let product_service = web::Data::new(ProductService::new(Arc::new(
        PgProductRepository::new(pool.clone()),
    )));
    let shop_service = web::Data::new(ShopService::new(Arc::new(PgShopRepository::new(
        pool.clone(),
    ))));
    let user_service = web::Data::new(UserService::new(Arc::new(PgUserRepository::new(
        pool.clone(),
    ))));

    let bind_address = ServerConfig::bind_address();
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 엔드포인트: http://{}/api/v1", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(token_service.clone())
            .app_data(auth_service.clone())
            .app_data(product_service.clone())
            .app_data(shop_service.clone())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
