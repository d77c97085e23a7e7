//! 인증 요청/응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// 로그인 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 회원가입 요청
///
/// 사용자 프로필과 인증 계정을 함께 만듭니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i32>,

    pub address: Option<String>,
}

/// 로그인 성공 페이로드
///
/// 발급된 토큰은 이후 요청의 `Authorization: Bearer {token}` 헤더로
/// 사용됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct LoginData {
    pub username: String,
    pub token: String,
}

/// 회원가입 성공 페이로드
#[derive(Debug, Clone, Serialize)]
pub struct RegisterData {
    pub user: User,
    pub email: String,
}
