//! # Domain Entities Module
//!
//! 저장소에 영속되는 엔티티를 정의합니다.
//!
//! ```text
//! entities/
//! ├── mod.rs          ← 이 파일
//! └── users/
//!     ├── mod.rs
//!     └── user.rs     ← UserRecord 엔티티
//! ```
//!
//! 엔티티의 식별자는 저장소가 생성 시점에 할당하며 이후 변경되지 않습니다.
//! 변경 가능한 필드는 `UserData`와 1:1로 대응합니다.

pub mod users;
