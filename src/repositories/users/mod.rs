//! 사용자 리포지토리 모듈
//!
//! 서비스 계층이 의존하는 저장소 포트 [`UserStore`]와 그 구현체를 제공합니다.
//!
//! - [`user_repo::MongoUserRepository`] - MongoDB `users` 컬렉션
//! - [`in_memory_user_repo::InMemoryUserRepository`] - 프로세스 메모리 (개발/테스트용)
//!
//! 존재 확인이 필요한 `update`/`delete`에서 대상이 없으면 두 구현 모두
//! `AppError::NotFound("User not found")`를 반환합니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::dto::users::request::UserData;
use crate::domain::entities::users::user::UserRecord;

pub mod in_memory_user_repo;
pub mod user_repo;

pub use in_memory_user_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

/// 사용자 저장소 포트
///
/// 서비스는 생성자로 `Arc<dyn UserStore>`를 주입받으며 구현체를 알지 못합니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 모든 사용자를 ID 오름차순으로 조회합니다.
    async fn fetch_all(&self) -> AppResult<Vec<UserRecord>>;

    /// ID로 사용자를 조회합니다. 없으면 `Ok(None)`.
    async fn fetch_one(&self, id: i64) -> AppResult<Option<UserRecord>>;

    /// 새 ID를 할당해 사용자를 저장합니다.
    async fn create(&self, data: UserData) -> AppResult<UserRecord>;

    /// 사용자 필드를 `data`로 통째로 교체합니다.
    async fn update(&self, id: i64, data: UserData) -> AppResult<UserRecord>;

    /// 사용자를 영구 삭제합니다.
    async fn delete(&self, id: i64) -> AppResult<()>;
}
