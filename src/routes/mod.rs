//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 리소스별로 그룹화하여 등록합니다.
//! 인증 라우트(로그인/회원가입)와 헬스체크만 public이고, 나머지
//! 리소스 스코프는 전부 [`AuthMiddleware`] 뒤에 있습니다.
//!
//! # 인증 레벨
//!
//! ```rust,ignore
//! // Public - 인증 불필요
//! // POST /api/v1/auth/login
//! // POST /api/v1/auth/register
//! // GET  /health
//!
//! // Protected - Bearer 토큰 필요
//! // GET  /api/v1/auth/me
//! // /api/v1/products, /api/v1/shops, /api/v1/users 전체
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::App;
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_product_routes(cfg);
    configure_shop_routes(cfg);
    configure_user_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 로그인/회원가입은 public, `/me`는 토큰이 필요합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::register)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::current_user),
            ),
    );
}

fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/products")
            .wrap(AuthMiddleware::required())
            .service(handlers::products::list_products)
            .service(handlers::products::get_product)
            .service(handlers::products::create_product)
            .service(handlers::products::update_product)
            .service(handlers::products::delete_product),
    );
}

fn configure_shop_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/shops")
            .wrap(AuthMiddleware::required())
            .service(handlers::shops::list_shops)
            .service(handlers::shops::get_shop)
            .service(handlers::shops::create_shop)
            .service(handlers::shops::update_shop)
            .service(handlers::shops::delete_shop),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데
/// 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "shop_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use chrono::Utc;

    use super::*;
    use crate::config::JwtConfig;
    use crate::domain::entities::{AuthAccount, User};
    use crate::services::TokenService;

    fn token_service() -> web::Data<TokenService> {
        web::Data::new(TokenService::new(&JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
        }))
    }

    #[actix_web::test]
    async fn health_check_is_public() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn protected_scope_rejects_requests_without_a_token() {
        let app = test::init_service(
            App::new()
                .app_data(token_service())
                .configure(configure_all_routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/v1/products").to_request();

        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "Failed");
        assert_eq!(body["isSuccess"], false);
        assert!(body["data"].is_null());
    }

    #[actix_web::test]
    async fn bearer_token_reaches_the_me_endpoint() {
        let tokens = token_service();
        let now = Utc::now();
        let token = tokens
            .issue(
                &AuthAccount {
                    id: 3,
                    email: "jane@example.com".to_string(),
                    password_hash: "irrelevant".to_string(),
                    user_id: 7,
                    created_at: now,
                    updated_at: now,
                },
                &User {
                    id: 7,
                    name: "Jane".to_string(),
                    age: Some(30),
                    role: "user".to_string(),
                    address: None,
                    shop_id: None,
                    created_at: now,
                    updated_at: now,
                },
            )
            .unwrap();

        let app = test::init_service(
            App::new().app_data(tokens).configure(configure_all_routes),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["isSuccess"], true);
        assert_eq!(body["data"]["id"], 3);
        assert_eq!(body["data"]["userId"], 7);
        assert_eq!(body["data"]["username"], "Jane");
    }

    #[actix_web::test]
    async fn tampered_token_is_rejected() {
        let tokens = token_service();
        let app = test::init_service(
            App::new().app_data(tokens).configure(configure_all_routes),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/v1/users")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();

        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}
