//! 사용자 리소스 서비스 모듈
//!
//! 사용자 목록/생성/교체/부분 수정/삭제 비즈니스 로직을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(store);
//! let updated = service.patch_user(1, patch).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
