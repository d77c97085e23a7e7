//! 인증 서비스
//!
//! 로그인과 회원가입의 비즈니스 로직입니다. 실패 사유를 구분해
//! 응답합니다. 없는 계정은 404, 비밀번호 불일치는 401입니다.

use std::sync::Arc;

use crate::domain::dto::auth::{LoginData, LoginRequest, RegisterData, RegisterRequest};
use crate::errors::{AppError, AppResult};
use crate::repositories::AuthRepository;
use crate::services::auth::credential;
use crate::services::auth::token_service::TokenService;

/// 인증 서비스
pub struct AuthService {
    repo: Arc<dyn AuthRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn AuthRepository>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// 이메일/비밀번호로 로그인하고 세션 토큰을 발급합니다
    ///
    /// # 반환값
    ///
    /// * `Ok(LoginData)` - 사용자 이름과 발급된 토큰
    /// * `Err(AppError::NotFound)` - 해당 이메일의 계정 없음
    /// * `Err(AppError::AuthenticationError)` - 비밀번호 불일치
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginData> {
        let found = self
            .repo
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User does not exist".to_string()))?;

        if !credential::verify_password(&request.password, &found.account.password_hash)? {
            return Err(AppError::AuthenticationError(
                "Incorrect password".to_string(),
            ));
        }

        let token = self.tokens.issue(&found.account, &found.user)?;

        Ok(LoginData {
            username: found.user.name,
            token,
        })
    }

    /// 사용자 프로필과 인증 계정을 생성합니다
    ///
    /// 이메일 중복은 저장소의 유니크 제약이 거절하고 `ConflictError`
    /// (400)로 전파됩니다.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<RegisterData> {
        let password_hash = credential::hash_password(&request.password)?;
        let (user, account) = self.repo.create_account(request, &password_hash).await?;

        Ok(RegisterData {
            user,
            email: account.email,
        })
    }
}
