//! MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 정수 `_id`를 키로 문서를 저장합니다.
//! ID는 `counters` 컬렉션의 `{ _id: "users" }` 문서를 `$inc` + upsert로 원자적으로 증가시켜 할당합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    bson::doc,
    options::{FindOneAndReplaceOptions, FindOneAndUpdateOptions, FindOptions, ReturnDocument},
    Collection,
};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::dto::users::request::UserData;
use crate::domain::entities::users::user::UserRecord;
use crate::repositories::users::UserStore;

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const USER_SEQUENCE: &str = "users";

/// `users` 컬렉션 문서 형태
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: i64,
    name: String,
    age: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl UserDocument {
    fn new(id: i64, data: UserData) -> Self {
        let UserData { name, age, email } = data;
        Self { id, name, age, email }
    }
}

impl From<UserDocument> for UserRecord {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            age: doc.age,
            email: doc.email,
        }
    }
}

/// ID 시퀀스 문서
#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

/// MongoDB 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    users: Collection<UserDocument>,
    counters: Collection<Counter>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        let database = db.get_database();

        Self {
            users: database.collection::<UserDocument>(USERS_COLLECTION),
            counters: database.collection::<Counter>(COUNTERS_COLLECTION),
        }
    }

    /// 다음 사용자 ID를 할당합니다.
    ///
    /// 카운터 문서가 없으면 upsert로 생성되어 첫 ID는 1입니다.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": USER_SEQUENCE }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::InternalError("사용자 ID 시퀀스를 할당하지 못했습니다".to_string()))?;

        Ok(counter.seq)
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn fetch_all(&self) -> AppResult<Vec<UserRecord>> {
        let options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let cursor = self
            .users
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let documents: Vec<UserDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(UserRecord::from).collect())
    }

    async fn fetch_one(&self, id: i64) -> AppResult<Option<UserRecord>> {
        let document = self
            .users
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(document.map(UserRecord::from))
    }

    async fn create(&self, data: UserData) -> AppResult<UserRecord> {
        let id = self.next_id().await?;
        let document = UserDocument::new(id, data);

        self.users
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("사용자 문서 생성: _id={}", id);
        Ok(document.into())
    }

    async fn update(&self, id: i64, data: UserData) -> AppResult<UserRecord> {
        let options = FindOneAndReplaceOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let replaced = self
            .users
            .find_one_and_replace(doc! { "_id": id }, UserDocument::new(id, data))
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        replaced.map(UserRecord::from).ok_or_else(AppError::user_not_found)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self
            .users
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count == 0 {
            return Err(AppError::user_not_found());
        }

        Ok(())
    }
}
