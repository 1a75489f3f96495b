//! 메시지 형태의 응답 본문
//!
//! ```json
//! { "message": "User deleted successfully" }
//! { "detail": "User not found" }
//! { "errors": [ { "field": "age", "code": "invalid_type", "message": "expected integer" } ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::models::validation::FieldErrors;

/// 삭제 성공 메시지
pub const USER_DELETED: &str = "User deleted successfully";

/// 성공 확인 메시지 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// 사용자 삭제 확인 응답
    pub fn user_deleted() -> Self {
        Self::new(USER_DELETED)
    }
}

/// 실패 상세 메시지 응답 (404, 400, 500)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

/// 필드 검증 실패 응답 (422)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorListResponse {
    pub errors: FieldErrors,
}

impl ErrorListResponse {
    pub fn new(errors: FieldErrors) -> Self {
        Self { errors }
    }
}
