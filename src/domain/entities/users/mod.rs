//! Users Entity Module
//!
//! 사용자 도메인의 영속 엔티티 [`user::UserRecord`]를 포함합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::UserRecord;
//!
//! let record = UserRecord::from_data(1, data);
//! let fields = record.to_fields(); // PATCH 병합용 전체 필드 맵
//! ```

pub mod user;

pub use user::UserRecord;
