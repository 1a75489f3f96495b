//! # 사용자 리소스 서비스 구현
//!
//! HTTP 형태의 연산을 저장소 호출로 변환합니다.
//! 대부분의 연산은 저장소에 그대로 위임하며, 로직이 있는 분기는 부분 수정(PATCH)과 삭제입니다.
//!
//! ## 부분 수정 흐름
//!
//! ```text
//! fetch_one(id) ──None──▶ NotFound (병합/검증/쓰기 없음)
//!      │ Some(record)
//!      ▼
//! record.to_fields() ──merge_fields(patch)──▶ merged
//!      │
//!      ▼
//! UserData::from_fields(merged) ──Err──▶ Unprocessable(errors) (쓰기 없음)
//!      │ Ok(data)
//!      ▼
//! update(id, data)
//! ```
//!
//! 조회 후 쓰기는 원자적이지 않습니다. 같은 ID에 대한 동시 수정은 마지막 쓰기가 남습니다.

use std::sync::Arc;

use log::{debug, warn};

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::UserData;
use crate::domain::entities::users::user::UserRecord;
use crate::domain::models::field_map::{merge_fields, FieldMap};
use crate::repositories::users::UserStore;

/// 사용자 리소스 서비스
///
/// 상태를 갖지 않으며 저장소 포트만 보관합니다.
/// `main`에서 구현체를 선택해 생성자로 주입합니다.
///
/// ```rust,ignore
/// let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
/// let service = UserService::new(store);
/// let users = service.list_users().await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 전체 사용자 목록. 빈 목록도 성공입니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        let users = self.store.fetch_all().await?;
        debug!("사용자 목록 조회: {}건", users.len());
        Ok(users)
    }

    /// 사용자 생성
    ///
    /// `data`는 HTTP 계층에서 이미 검증된 값입니다.
    pub async fn create_user(&self, data: UserData) -> AppResult<UserRecord> {
        let user = self.store.create(data).await?;
        debug!("사용자 생성: id={}", user.id);
        Ok(user)
    }

    /// 사용자 전체 교체 (PUT)
    ///
    /// 기존 레코드와 병합하지 않으며 존재 확인도 저장소에 맡깁니다.
    pub async fn replace_user(&self, id: i64, data: UserData) -> AppResult<UserRecord> {
        let user = self.store.update(id, data).await?;
        debug!("사용자 교체: id={}", id);
        Ok(user)
    }

    /// 사용자 부분 수정 (PATCH)
    ///
    /// # 반환값
    ///
    /// * `Ok(UserRecord)` - 병합/검증 후 저장된 레코드
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 없음
    /// * `Err(AppError::Unprocessable)` - 병합 결과가 스키마를 위반함
    pub async fn patch_user(&self, id: i64, patch: FieldMap) -> AppResult<UserRecord> {
        let existing = self.store.fetch_one(id).await?.ok_or_else(|| {
            warn!("부분 수정 대상 없음: id={}", id);
            AppError::user_not_found()
        })?;

        let merged = merge_fields(existing.to_fields(), patch);

        let data = UserData::from_fields(&merged).map_err(|errors| {
            warn!("부분 수정 검증 실패: id={}, {}", id, errors);
            AppError::Unprocessable(errors)
        })?;

        let user = self.store.update(id, data).await?;
        debug!("사용자 부분 수정: id={}", id);
        Ok(user)
    }

    /// 사용자 삭제
    ///
    /// 존재를 먼저 확인하고, 없으면 저장소 삭제를 호출하지 않습니다.
    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        if self.store.fetch_one(id).await?.is_none() {
            warn!("삭제 대상 없음: id={}", id);
            return Err(AppError::user_not_found());
        }

        self.store.delete(id).await?;
        debug!("사용자 삭제: id={}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::USER_NOT_FOUND;
    use crate::repositories::users::{InMemoryUserRepository, MockUserStore};
    use mockall::predicate::eq;
    use serde_json::{json, Value};

    fn ann() -> UserRecord {
        UserRecord {
            id: 1,
            name: "Ann".to_string(),
            age: 30,
            email: Some("ann@example.com".to_string()),
        }
    }

    fn patch(value: Value) -> FieldMap {
        value.as_object().cloned().expect("object literal")
    }

    fn service(store: MockUserStore) -> UserService {
        UserService::new(Arc::new(store))
    }

    #[actix_web::test]
    async fn test_list_users_empty_store() {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));

        let users = service.list_users().await.unwrap();

        assert!(users.is_empty());
    }

    #[actix_web::test]
    async fn test_patch_merges_only_present_keys() {
        let mut store = MockUserStore::new();
        store
            .expect_fetch_one()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(ann())));
        store
            .expect_update()
            .withf(|id, data| {
                *id == 1
                    && *data
                        == UserData {
                            name: "Ann".to_string(),
                            age: 31,
                            email: Some("ann@example.com".to_string()),
                        }
            })
            .times(1)
            .returning(|id, data| Ok(UserRecord::from_data(id, data)));

        let updated = service(store)
            .patch_user(1, patch(json!({ "age": 31 })))
            .await
            .unwrap();

        assert_eq!(updated, UserRecord { age: 31, ..ann() });
    }

    #[actix_web::test]
    async fn test_patch_null_clears_optional_field() {
        let mut store = MockUserStore::new();
        store.expect_fetch_one().returning(|_| Ok(Some(ann())));
        store
            .expect_update()
            .withf(|_, data| data.email.is_none() && data.name == "Ann")
            .times(1)
            .returning(|id, data| Ok(UserRecord::from_data(id, data)));

        let updated = service(store)
            .patch_user(1, patch(json!({ "email": null })))
            .await
            .unwrap();

        assert_eq!(updated.email, None);
    }

    #[actix_web::test]
    async fn test_patch_ignores_unknown_keys() {
        let mut store = MockUserStore::new();
        store.expect_fetch_one().returning(|_| Ok(Some(ann())));
        store
            .expect_update()
            .withf(|_, data| *data == ann().data())
            .times(1)
            .returning(|id, data| Ok(UserRecord::from_data(id, data)));

        let updated = service(store)
            .patch_user(1, patch(json!({ "nickname": "A", "id": 99 })))
            .await
            .unwrap();

        assert_eq!(updated, ann());
    }

    #[actix_web::test]
    async fn test_patch_missing_user_never_writes() {
        let mut store = MockUserStore::new();
        store
            .expect_fetch_one()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(None));
        store.expect_update().never();

        let result = service(store).patch_user(7, patch(json!({ "age": 31 }))).await;

        match result {
            Err(AppError::NotFound(detail)) => assert_eq!(detail, USER_NOT_FOUND),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_patch_invalid_type_never_writes() {
        let mut store = MockUserStore::new();
        store.expect_fetch_one().returning(|_| Ok(Some(ann())));
        store.expect_update().never();

        let result = service(store)
            .patch_user(1, patch(json!({ "age": "not-a-number" })))
            .await;

        match result {
            Err(AppError::Unprocessable(errors)) => {
                assert!(errors.contains_field("age"));
                assert_eq!(errors.len(), 1);
            }
            other => panic!("expected Unprocessable, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_patch_null_required_field_is_rejected() {
        let mut store = MockUserStore::new();
        store.expect_fetch_one().returning(|_| Ok(Some(ann())));
        store.expect_update().never();

        let result = service(store).patch_user(1, patch(json!({ "name": null }))).await;

        assert!(matches!(result, Err(AppError::Unprocessable(ref e)) if e.contains_field("name")));
    }

    #[actix_web::test]
    async fn test_patch_propagates_storage_failure() {
        let mut store = MockUserStore::new();
        store
            .expect_fetch_one()
            .returning(|_| Err(AppError::DatabaseError("connection reset".to_string())));
        store.expect_update().never();

        let result = service(store).patch_user(1, patch(json!({ "age": 31 }))).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_replace_does_not_merge_with_existing() {
        let mut store = MockUserStore::new();
        store.expect_fetch_one().never();
        store
            .expect_update()
            .withf(|id, data| *id == 1 && data.email.is_none())
            .times(1)
            .returning(|id, data| Ok(UserRecord::from_data(id, data)));

        let replaced = service(store)
            .replace_user(
                1,
                UserData {
                    name: "Ann".to_string(),
                    age: 30,
                    email: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(replaced.email, None);
    }

    #[actix_web::test]
    async fn test_delete_missing_user_never_deletes() {
        let mut store = MockUserStore::new();
        store.expect_fetch_one().with(eq(5)).returning(|_| Ok(None));
        store.expect_delete().never();

        let result = service(store).delete_user(5).await;

        match result {
            Err(AppError::NotFound(detail)) => assert_eq!(detail, "User not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_delete_existing_user_deletes_once() {
        let mut store = MockUserStore::new();
        store.expect_fetch_one().with(eq(1)).returning(|_| Ok(Some(ann())));
        store.expect_delete().with(eq(1)).times(1).returning(|_| Ok(()));

        service(store).delete_user(1).await.unwrap();
    }
}
