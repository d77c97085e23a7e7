//! 비밀번호 해싱과 검증
//!
//! bcrypt를 감싸는 얇은 계층입니다. 평문 비밀번호는 인자로만 흐르고
//! 로그나 에러 메시지에 실리지 않습니다.

use crate::config::PasswordConfig;
use crate::errors::{AppError, AppResult};

/// 평문 비밀번호를 bcrypt로 해싱합니다
pub fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, PasswordConfig::bcrypt_cost())
        .map_err(|e| AppError::InternalError(format!("failed to hash password: {}", e)))
}

/// 평문 비밀번호를 저장된 해시와 대조합니다
///
/// 불일치는 `Ok(false)`입니다. `Err`는 해시가 손상되었거나 bcrypt가
/// 처리할 수 없는 경우에만 발생합니다.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| AppError::InternalError(format!("failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies_against_the_original() {
        let hash = bcrypt::hash("correct horse", 4).unwrap();

        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_internal_error() {
        let result = verify_password("anything", "not-a-bcrypt-hash");

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
