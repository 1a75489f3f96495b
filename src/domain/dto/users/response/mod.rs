//! 사용자 응답 DTO
//!
//! 레코드 자체는 `UserRecord`를 그대로 직렬화하고,
//! 여기에는 메시지/에러 형태의 응답 본문만 정의합니다.

pub mod message_response;

pub use message_response::{DetailResponse, ErrorListResponse, MessageResponse};
