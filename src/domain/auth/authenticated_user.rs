//! 인증된 요청 주체
//!
//! 인증 미들웨어가 검증한 토큰 클레임에서 만들어 Request Extensions에
//! 저장하는 주체 정보입니다. 요청 단위로 생성되어 요청이 끝나면
//! 폐기됩니다.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::errors::AppError;

/// 인증된 요청의 주체
///
/// `role`은 토큰 클레임에 실리지 않는 저장 속성이므로 여기에 포함되지
/// 않습니다. 필요하면 `user_id`로 사용자 프로필을 조회합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    /// 인증 계정 ID (토큰의 `id` 클레임)
    pub id: i32,
    /// 사용자 프로필 ID (토큰의 `userId` 클레임)
    pub user_id: i32,
    /// 사용자 이름
    pub username: String,
    /// 로그인 이메일
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Request Extensions에서 인증된 주체를 꺼냅니다
    ///
    /// 인증 미들웨어를 거치지 않은 라우트에서 사용하면
    /// `AuthenticationError`가 됩니다.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();

        ready(user.ok_or_else(|| {
            AppError::AuthenticationError("Authentication required".to_string())
        }))
    }
}
