//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 타입을 제공합니다.
//! 현재는 HTTP 응답으로 자동 변환되는 에러 시스템만 포함합니다.

pub mod errors;

pub use errors::*;
