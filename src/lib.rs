//! 사용자 리소스 서비스 백엔드
//!
//! 사용자 레코드의 목록/생성/전체 교체/부분 수정/삭제를 제공하는 REST 서비스입니다.
//! 부분 수정(PATCH)은 기존 레코드와 요청 필드를 얕게 병합한 뒤 전체 스키마로 다시 검증합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /users, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 병합, 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (MongoDB / 인메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_resource_service::repositories::users::InMemoryUserRepository;
//! use user_resource_service::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let users = service.list_users().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
