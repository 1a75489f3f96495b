//! 사용자 요청 DTO
//!
//! - [`user_data`] - POST/PUT 본문 및 PATCH 병합 결과의 검증 대상

pub mod user_data;

pub use user_data::UserData;
