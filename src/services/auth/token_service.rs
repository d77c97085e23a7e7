//! JWT 토큰 관리 서비스
//!
//! HMAC-SHA256 서명으로 세션 토큰을 발급하고 검증합니다. 서명 키는
//! 부팅 시 [`JwtConfig`]에서 한 번 파생되어 서비스 수명 동안
//! 재사용됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::domain::entities::{AuthAccount, User};
use crate::errors::{AppError, AppResult};

/// 세션 토큰의 클레임
///
/// `id`는 인증 계정, `userId`는 연결된 사용자 프로필을 가리킵니다.
/// 역할(`role`)은 클레임에 싣지 않습니다. 토큰 발급 후 역할이 바뀌어도
/// 토큰이 낡은 역할을 주장하지 못하게 하기 위함입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub iat: i64,
    pub exp: i64,
}

/// JWT 토큰 관리 서비스
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.secret.as_ref()),
            ttl: Duration::hours(config.expiration_hours),
        }
    }

    /// 로그인 성공한 계정의 세션 토큰을 발급합니다
    ///
    /// # 인자
    ///
    /// * `account` - 검증이 끝난 인증 계정
    /// * `user` - 연결된 사용자 프로필
    ///
    /// # 반환값
    ///
    /// * `Ok(String)` - 서명된 JWT
    /// * `Err(AppError::InternalError)` - 토큰 서명 실패
    pub fn issue(&self, account: &AuthAccount, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            id: account.id,
            username: user.name.clone(),
            email: account.email.clone(),
            user_id: user.id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("failed to sign token: {}", e)))
    }

    /// 토큰을 검증하고 클레임을 추출합니다
    ///
    /// # 반환값
    ///
    /// * `Ok(TokenClaims)` - 서명과 만료가 모두 유효한 토큰의 클레임
    /// * `Err(AppError::AuthenticationError)` - 만료, 서명 불일치, 형식 오류
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                _ => AppError::AuthenticationError("Invalid token".to_string()),
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰 부분을 추출합니다
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::AuthenticationError("Invalid authorization header format".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str, hours: i64) -> TokenService {
        TokenService::new(&JwtConfig {
            secret: secret.to_string(),
            expiration_hours: hours,
        })
    }

    fn fixtures() -> (AuthAccount, User) {
        let now = Utc::now();
        let account = AuthAccount {
            id: 3,
            email: "jane@example.com".to_string(),
            password_hash: "irrelevant".to_string(),
            user_id: 7,
            created_at: now,
            updated_at: now,
        };
        let user = User {
            id: 7,
            name: "Jane".to_string(),
            age: Some(30),
            role: "user".to_string(),
            address: None,
            shop_id: None,
            created_at: now,
            updated_at: now,
        };
        (account, user)
    }

    #[test]
    fn issued_token_carries_account_and_user_claims() {
        let tokens = service("test-secret", 1);
        let (account, user) = fixtures();

        let token = tokens.issue(&account, &user).unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.id, 3);
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "Jane");
        assert_eq!(claims.email, "jane@example.com");
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = service("test-secret", -2);
        let (account, user) = fixtures();

        let token = tokens.issue(&account, &user).unwrap();
        let result = tokens.verify(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn token_signed_with_a_different_secret_is_rejected() {
        let tokens = service("test-secret", 1);
        let other = service("other-secret", 1);
        let (account, user) = fixtures();

        let token = other.issue(&account, &user).unwrap();
        let result = tokens.verify(&token);

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn bearer_prefix_is_required() {
        let tokens = service("test-secret", 1);

        assert_eq!(tokens.extract_bearer_token("Bearer abc").unwrap(), "abc");
        assert!(tokens.extract_bearer_token("Basic abc").is_err());
    }
}
