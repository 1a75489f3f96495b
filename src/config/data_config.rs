//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 저장소, 요청 제한, CORS 설정을 환경 변수에서 읽어옵니다.
//! 숫자 값 파싱에 실패하면 에러 로그를 남기고 기본값을 사용합니다.

use std::env;
use std::str::FromStr;

use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 사용합니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경별 기본 로그 필터
    ///
    /// `RUST_LOG`가 설정되지 않았을 때 사용됩니다.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development | Environment::Test => {
                "debug,actix_web=info,mongodb=info"
            }
            Environment::Staging | Environment::Production => "info,actix_web=info",
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    /// 환경 변수 `HOST`, `PORT`, `WORKERS`에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or_default("PORT", env::var("PORT").ok(), 8080),
            workers: parse_or_default("WORKERS", env::var("WORKERS").ok(), 4),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB 컬렉션
    Mongo,
    /// 프로세스 메모리 (재시작 시 소실)
    Memory,
}

impl StorageBackend {
    /// 알 수 없는 값은 `Mongo`로 처리합니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::Mongo,
        }
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    /// ## 환경 변수
    /// - `STORAGE_BACKEND`: `mongo` (기본값) 또는 `memory`
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "user_resource_dev")
    pub fn from_env() -> Self {
        Self {
            backend: StorageBackend::parse(
                &env::var("STORAGE_BACKEND").unwrap_or_else(|_| "mongo".to_string()),
            ),
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "user_resource_dev".to_string()),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// `RATE_LIMIT_PER_SECOND` (기본값 100), `RATE_LIMIT_BURST_SIZE` (기본값 200)
    pub fn from_env() -> Self {
        Self {
            per_second: parse_or_default(
                "RATE_LIMIT_PER_SECOND",
                env::var("RATE_LIMIT_PER_SECOND").ok(),
                100,
            ),
            burst_size: parse_or_default(
                "RATE_LIMIT_BURST_SIZE",
                env::var("RATE_LIMIT_BURST_SIZE").ok(),
                200,
            ),
        }
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분)
    pub fn from_env() -> Self {
        Self::parse(env::var("CORS_ALLOWED_ORIGINS").ok())
    }

    pub fn parse(raw: Option<String>) -> Self {
        let allowed_origins: Vec<String> = raw
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if allowed_origins.is_empty() {
            return Self {
                allowed_origins: Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
            };
        }

        Self { allowed_origins }
    }
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: Environment::current(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }
}

/// 환경 변수 값을 파싱하고, 없거나 잘못된 경우 기본값을 반환합니다.
fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}
