//! 필드 단위 검증 에러 모델
//!
//! 검증 실패를 언어 중립적인 `{field, code, message}` 레코드의 순서 있는 목록으로 표현합니다.
//! 422 응답의 `errors` 배열이 이 타입을 그대로 직렬화한 결과입니다.
//!
//! ```json
//! {
//!   "errors": [
//!     { "field": "age", "code": "invalid_type", "message": "expected integer" }
//!   ]
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

/// 필드 하나에 대한 검증 실패
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// 문제가 된 필드 경로
    pub field: String,
    /// 기계 판독용 사유 코드 (`missing`, `invalid_type`, `length`, `blank`, `range`, `email`)
    pub code: String,
    /// 사람이 읽을 수 있는 설명
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// 필수 필드 누락 (null 포함)
    pub fn missing(field: &str) -> Self {
        Self::new(field, "missing", "field required")
    }

    /// 타입 불일치
    pub fn invalid_type(field: &str, expected: &str) -> Self {
        Self::new(field, "invalid_type", format!("expected {}", expected))
    }

    /// `validator` 규칙 위반을 필드 에러로 변환합니다.
    ///
    /// 메시지가 없으면 코드로 기본 메시지를 만듭니다.
    pub fn from_validation_error(field: &str, error: &ValidationError) -> Self {
        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("invalid value ({})", error.code));

        Self::new(field, error.code.to_string(), message)
    }
}

/// 검증 에러 목록
///
/// 스키마 필드 순서대로 쌓이며, 비어 있으면 검증 성공을 의미합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// 특정 필드에 대한 에러가 있는지 확인합니다.
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.iter().map(|e| e.field.as_str()).collect();
        write!(f, "{} field error(s) on [{}]", self.0.len(), fields.join(", "))
    }
}
