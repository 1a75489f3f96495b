//! # Domain Layer Module
//!
//! 사용자 리소스의 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 레코드 (UserRecord)
//! ├── dto       - 요청/응답 계약 (UserData, 메시지 응답)
//! └── models    - 필드 맵 병합, 검증 에러 목록
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod dto;
pub mod entities;
pub mod models;
