//! # Domain Models Module
//!
//! 엔티티나 DTO에 속하지 않는 도메인 보조 모델을 정의합니다.
//!
//! - [`field_map`] - PATCH 병합에 쓰이는 동적 타입 필드 맵
//! - [`validation`] - 필드 단위 검증 에러 목록

pub mod field_map;
pub mod validation;

pub use field_map::{merge_fields, FieldMap};
pub use validation::{FieldError, FieldErrors};
