//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값을 [`AppConfig`]로 모아 시작 시점에 한 번 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, Rate Limiting, CORS 설정
//!
//! ## 환경 변수
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `ENVIRONMENT` | `production` |
//! | `HOST` / `PORT` / `WORKERS` | `127.0.0.1` / `8080` / `4` |
//! | `STORAGE_BACKEND` | `mongo` |
//! | `MONGODB_URI` | `mongodb://localhost:27017` |
//! | `DATABASE_NAME` | `user_resource_dev` |
//! | `RATE_LIMIT_PER_SECOND` / `RATE_LIMIT_BURST_SIZE` | `100` / `200` |
//! | `CORS_ALLOWED_ORIGINS` | localhost 3000/8080 |
//!
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("bind: {}", config.server.bind_address());
//! ```

pub mod data_config;

pub use data_config::*;
