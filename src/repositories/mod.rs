//! # Repositories Module
//!
//! 데이터 액세스 계층입니다. 서비스 계층은 이 모듈의 포트 trait에만 의존하며,
//! 어떤 구현체를 쓸지는 `main`에서 설정에 따라 결정합니다.
//!
//! ```text
//! services::users::UserService
//!          │ Arc<dyn UserStore>
//!          ▼
//! ┌──────────────────────────┬──────────────────────────┐
//! │ MongoUserRepository      │ InMemoryUserRepository   │
//! │ (users, counters 컬렉션) │ (BTreeMap + RwLock)      │
//! └──────────────────────────┴──────────────────────────┘
//! ```

pub mod users;
