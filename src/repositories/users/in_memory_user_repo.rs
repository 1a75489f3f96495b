//! 인메모리 사용자 리포지토리
//!
//! `STORAGE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다.
//! 데이터는 프로세스가 종료되면 사라집니다.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserData;
use crate::domain::entities::users::user::UserRecord;
use crate::repositories::users::UserStore;

/// 인메모리 사용자 리포지토리
///
/// ID는 1부터 증가하며 삭제된 ID는 재사용하지 않습니다.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<i64, UserRecord>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// 초기 레코드로 채운 리포지토리를 생성합니다.
    ///
    /// 다음 할당 ID는 가장 큰 기존 ID 다음 값입니다.
    pub fn with_records(records: impl IntoIterator<Item = UserRecord>) -> Self {
        let users: BTreeMap<i64, UserRecord> = records.into_iter().map(|r| (r.id, r)).collect();
        let next_id = users.keys().next_back().map_or(1, |max| max + 1);

        Self {
            users: RwLock::new(users),
            next_id: AtomicI64::new(next_id),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn fetch_all(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn fetch_one(&self, id: i64) -> AppResult<Option<UserRecord>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create(&self, data: UserData) -> AppResult<UserRecord> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = UserRecord::from_data(id, data);

        self.users.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, data: UserData) -> AppResult<UserRecord> {
        let mut users = self.users.write().await;
        let slot = users.get_mut(&id).ok_or_else(AppError::user_not_found)?;

        *slot = UserRecord::from_data(id, data);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.users
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(AppError::user_not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str, age: i64) -> UserData {
        UserData {
            name: name.to_string(),
            age,
            email: None,
        }
    }

    #[actix_web::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(data("Ann", 30)).await.unwrap();
        let second = repo.create(data("Bo", 41)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.fetch_all().await.unwrap(), vec![first, second]);
    }

    #[actix_web::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create(data("Ann", 30)).await.unwrap();

        repo.delete(first.id).await.unwrap();
        let second = repo.create(data("Bo", 41)).await.unwrap();

        assert_eq!(second.id, 2);
        assert_eq!(repo.fetch_one(first.id).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryUserRepository::new();
        let created = repo
            .create(UserData {
                email: Some("ann@example.com".to_string()),
                ..data("Ann", 30)
            })
            .await
            .unwrap();

        let updated = repo.update(created.id, data("Ann", 31)).await.unwrap();

        assert_eq!(updated.age, 31);
        assert_eq!(updated.email, None);
        assert_eq!(repo.fetch_one(created.id).await.unwrap(), Some(updated));
    }

    #[actix_web::test]
    async fn test_update_and_delete_missing_id_are_not_found() {
        let repo = InMemoryUserRepository::new();

        let update = repo.update(42, data("Ann", 30)).await;
        let delete = repo.delete(42).await;

        assert!(matches!(update, Err(AppError::NotFound(_))));
        assert!(matches!(delete, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_with_records_continues_sequence() {
        let repo = InMemoryUserRepository::with_records(vec![UserRecord::from_data(5, data("Ann", 30))]);

        let created = repo.create(data("Bo", 41)).await.unwrap();

        assert_eq!(created.id, 6);
    }
}
