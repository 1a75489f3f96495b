//! User Entity Implementation
//!
//! 저장소가 관리하는 사용자 레코드입니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::dto::users::request::UserData;
use crate::domain::models::field_map::FieldMap;

/// 사용자 레코드
///
/// `id`는 저장소가 생성 시 할당하며 불변입니다.
/// 나머지 필드는 `UserData`와 동일한 스키마를 따릅니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRecord {
    /// 할당된 ID와 검증된 데이터로 레코드를 구성합니다.
    pub fn from_data(id: i64, data: UserData) -> Self {
        let UserData { name, age, email } = data;

        Self { id, name, age, email }
    }

    /// 변경 가능한 필드만 `UserData`로 복사합니다.
    pub fn data(&self) -> UserData {
        UserData {
            name: self.name.clone(),
            age: self.age,
            email: self.email.clone(),
        }
    }

    /// 모든 스키마 필드를 현재 값과 함께 필드 맵으로 변환합니다.
    ///
    /// 비어 있는 선택 필드도 `null`로 포함되어 병합 기준이 항상 완전합니다.
    pub fn to_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("id".to_string(), Value::from(self.id));
        fields.insert("name".to_string(), Value::from(self.name.clone()));
        fields.insert("age".to_string(), Value::from(self.age));
        fields.insert(
            "email".to_string(),
            self.email.clone().map_or(Value::Null, Value::from),
        );
        fields
    }
}
