//! # User DTOs
//!
//! 사용자 리소스 API의 요청/응답 계약입니다.

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
