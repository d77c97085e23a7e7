//! JWT 인증 미들웨어
//!
//! 보호된 라우트 스코프에 `wrap`으로 걸어 요청 파이프라인에서 토큰을
//! 검증합니다. 검증에 성공하면 [`AuthenticatedUser`]를 Request
//! Extensions에 넣어 핸들러의 extractor가 꺼내 쓸 수 있게 합니다.
//!
//! [`AuthenticatedUser`]: crate::domain::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    ///
    /// 토큰이 없거나 유효하지 않으면 요청이 핸들러에 도달하기 전에
    /// 401 응답 봉투로 끝납니다.
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
