//! # 사용자 데이터 DTO
//!
//! 사용자 레코드의 변경 가능한 필드를 표현하는 전송/검증용 구조체입니다.
//! POST/PUT 요청 본문이자 PATCH 병합 결과의 검증 대상으로 사용됩니다.
//!
//! ## 스키마
//!
//! | 필드 | 타입 | 필수 | 제약 |
//! |------|------|------|------|
//! | `name` | string | O | 1-100자, 공백만으로 구성 불가 |
//! | `age` | integer | O | 0-150 |
//! | `email` | string / null | X | 이메일 형식 |
//!
//! ## 검증
//!
//! 필드마다 타입 추출 후 곧바로 `validator` 규칙을 적용합니다.
//! 한 필드의 타입 에러가 다른 필드의 제약 검사를 막지 않으며,
//! 에러는 필드당 최대 하나씩 스키마 순서(`name`, `age`, `email`)로 모입니다.
//!
//! ```rust,ignore
//! let fields = serde_json::json!({ "name": "Ann", "age": "thirty", "email": "bad" });
//! let errors = UserData::from_fields(fields.as_object().unwrap()).unwrap_err();
//! assert!(errors.contains_field("age") && errors.contains_field("email"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{ValidateEmail, ValidateLength, ValidateRange, ValidationError};

use crate::domain::models::field_map::FieldMap;
use crate::domain::models::validation::{FieldError, FieldErrors};

const NAME_MIN_LENGTH: u64 = 1;
const NAME_MAX_LENGTH: u64 = 100;
const AGE_MIN: i64 = 0;
const AGE_MAX: i64 = 150;

/// 검증된 사용자 필드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// 표시 이름
    pub name: String,

    /// 나이
    pub age: i64,

    /// 연락용 이메일 (선택)
    #[serde(default)]
    pub email: Option<String>,
}

impl UserData {
    /// 필드 맵에서 `UserData`를 생성하고 검증합니다.
    ///
    /// 스키마에 없는 키(`id` 등)는 무시합니다.
    /// 선택 필드에 `null`이 오면 값을 비운 것으로 처리합니다.
    pub fn from_fields(fields: &FieldMap) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = required_string(fields, "name", &mut errors)
            .filter(|name| check(&mut errors, "name", validate_name(name)));
        let age = required_integer(fields, "age", &mut errors)
            .filter(|age| check(&mut errors, "age", validate_age(*age)));
        let email = optional_string(fields, "email", &mut errors).filter(|email| {
            email
                .as_deref()
                .is_none_or(|email| check(&mut errors, "email", validate_email(email)))
        });

        match (name, age, email) {
            (Some(name), Some(age), Some(email)) if errors.is_empty() => {
                Ok(Self { name, age, email })
            }
            _ => Err(errors),
        }
    }
}

/// 규칙 위반을 `errors`에 기록하고 통과 여부를 반환합니다.
fn check(errors: &mut FieldErrors, field: &str, result: Result<(), ValidationError>) -> bool {
    match result {
        Ok(()) => true,
        Err(error) => {
            errors.push(FieldError::from_validation_error(field, &error));
            false
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !name.validate_length(Some(NAME_MIN_LENGTH), Some(NAME_MAX_LENGTH), None) {
        return Err(ValidationError::new("length")
            .with_message("name must be between 1 and 100 characters".into()));
    }
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("name must not be blank".into()));
    }
    Ok(())
}

fn validate_age(age: i64) -> Result<(), ValidationError> {
    if !age.validate_range(Some(AGE_MIN), Some(AGE_MAX), None, None) {
        return Err(ValidationError::new("range").with_message("age must be between 0 and 150".into()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if !email.validate_email() {
        return Err(ValidationError::new("email")
            .with_message("email must be a valid email address".into()));
    }
    Ok(())
}

fn required_string(fields: &FieldMap, field: &str, errors: &mut FieldErrors) -> Option<String> {
    match fields.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::missing(field));
            None
        }
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(FieldError::invalid_type(field, "string"));
            None
        }
    }
}

fn required_integer(fields: &FieldMap, field: &str, errors: &mut FieldErrors) -> Option<i64> {
    match fields.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::missing(field));
            None
        }
        Some(value) => match value.as_i64() {
            Some(number) => Some(number),
            None => {
                errors.push(FieldError::invalid_type(field, "integer"));
                None
            }
        },
    }
}

/// 선택 문자열: 바깥 `Option`은 추출 성공 여부, 안쪽은 값 존재 여부
fn optional_string(
    fields: &FieldMap,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<Option<String>> {
    match fields.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(value)) => Some(Some(value.clone())),
        Some(_) => {
            errors.push(FieldError::invalid_type(field, "string or null"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> FieldMap {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn test_from_fields_accepts_valid_mapping() {
        let data = UserData::from_fields(&fields(json!({
            "id": 1,
            "name": "Ann",
            "age": 30,
            "email": "ann@example.com"
        })))
        .unwrap();

        assert_eq!(
            data,
            UserData {
                name: "Ann".to_string(),
                age: 30,
                email: Some("ann@example.com".to_string()),
            }
        );
    }

    #[test]
    fn test_optional_email_may_be_absent_or_null() {
        let absent = UserData::from_fields(&fields(json!({ "name": "Ann", "age": 30 }))).unwrap();
        let null = UserData::from_fields(&fields(json!({ "name": "Ann", "age": 30, "email": null })))
            .unwrap();

        assert_eq!(absent.email, None);
        assert_eq!(null.email, None);
    }

    #[test]
    fn test_wrong_type_is_reported_on_field() {
        let errors =
            UserData::from_fields(&fields(json!({ "name": "Ann", "age": "not-a-number" })))
                .unwrap_err();

        assert_eq!(errors.len(), 1);
        let error = errors.iter().next().unwrap();
        assert_eq!(error.field, "age");
        assert_eq!(error.code, "invalid_type");
    }

    #[test]
    fn test_fractional_age_is_not_an_integer() {
        let errors =
            UserData::from_fields(&fields(json!({ "name": "Ann", "age": 30.5 }))).unwrap_err();

        assert!(errors.contains_field("age"));
    }

    #[test]
    fn test_all_type_errors_are_collected_in_schema_order() {
        let errors = UserData::from_fields(&fields(json!({ "age": true, "email": 5 }))).unwrap_err();

        let summary: Vec<(&str, &str)> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.code.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![("name", "missing"), ("age", "invalid_type"), ("email", "invalid_type")]
        );
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let errors =
            UserData::from_fields(&fields(json!({ "name": null, "age": 30 }))).unwrap_err();

        let error = errors.iter().next().unwrap();
        assert_eq!(error.field, "name");
        assert_eq!(error.code, "missing");
    }

    #[test]
    fn test_constraint_errors_use_validator_codes() {
        let errors = UserData::from_fields(&fields(json!({
            "name": "",
            "age": 200,
            "email": "not-an-email"
        })))
        .unwrap_err();

        let summary: Vec<(&str, &str)> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.code.as_str()))
            .collect();
        assert_eq!(summary, vec![("name", "length"), ("age", "range"), ("email", "email")]);
    }

    #[test]
    fn test_type_error_does_not_hide_constraint_errors() {
        let errors = UserData::from_fields(&fields(json!({
            "name": "   ",
            "age": "x",
            "email": "bad"
        })))
        .unwrap_err();

        let summary: Vec<(&str, &str)> = errors
            .iter()
            .map(|e| (e.field.as_str(), e.code.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![("name", "blank"), ("age", "invalid_type"), ("email", "email")]
        );
    }

    #[test]
    fn test_boundary_values_are_accepted() {
        let long_name = "a".repeat(100);
        let data =
            UserData::from_fields(&fields(json!({ "name": long_name, "age": 150 }))).unwrap();
        assert_eq!(data.age, 150);

        let data = UserData::from_fields(&fields(json!({ "name": "A", "age": 0 }))).unwrap();
        assert_eq!(data.age, 0);

        let errors = UserData::from_fields(&fields(json!({ "name": "a".repeat(101), "age": -1 })))
            .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let errors =
            UserData::from_fields(&fields(json!({ "name": "   ", "age": 30 }))).unwrap_err();

        let error = errors.iter().next().unwrap();
        assert_eq!(error.field, "name");
        assert_eq!(error.code, "blank");
    }
}
