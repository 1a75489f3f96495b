//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 데이터 구조를 정의합니다.
//! 엔티티와 달리 검증 규칙과 응답 형태를 책임집니다.

pub mod users;
