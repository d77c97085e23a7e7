//! 사용자 서비스
//!
//! 사용자 목록/단건 조회와 수정/삭제의 비즈니스 로직입니다.
//! 사용자 생성은 회원가입([`crate::services::auth::AuthService`])의
//! 일부이므로 여기에 없습니다.

use std::sync::Arc;

use crate::domain::dto::users::{UpdateUserRequest, UserListQuery};
use crate::domain::entities::User;
use crate::errors::{AppError, AppResult};
use crate::query::filter::for_users;
use crate::query::{PageRequest, PageResult};
use crate::repositories::UserRepository;

/// 사용자 서비스
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// 필터/페이지네이션이 적용된 사용자 목록을 조회합니다
    pub async fn list(&self, query: &UserListQuery) -> AppResult<PageResult<User>> {
        let filters = for_users(
            query.name.as_deref(),
            query.age.as_deref(),
            query.role.as_deref(),
            query.address.as_deref(),
            query.shop_id.as_deref(),
        );
        let page = PageRequest::from_params(query.page.as_deref(), query.limit.as_deref());

        let total = self.repo.count(&filters).await?;
        let users = self.repo.find_page(&filters, &page).await?;

        Ok(PageResult::assemble(users, total, &page))
    }

    pub async fn get(&self, id: i32) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// 사용자 수정 — 대상이 없으면 아무것도 바꾸지 않고 404
    pub async fn update(&self, id: i32, changes: &UpdateUserRequest) -> AppResult<User> {
        self.repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// 사용자 삭제 — 대상이 없으면 아무것도 지우지 않고 404
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        Ok(())
    }
}
