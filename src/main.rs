//! 사용자 리소스 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정에 따라 MongoDB 또는 인메모리 저장소를 선택해 서비스에 주입합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_resource_service::config::{AppConfig, CorsConfig, Environment, StorageBackend};
use user_resource_service::db::Database;
use user_resource_service::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserStore,
};
use user_resource_service::routes::configure_all_routes;
use user_resource_service::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging(&Environment::current());

    info!("🚀 사용자 리소스 서비스 시작중...");

    let config = AppConfig::from_env();
    info!("Environment: {:?}", config.environment);

    let store = initialize_store(&config).await?;
    let user_service = web::Data::new(UserService::new(store));

    info!("✅ 서비스 초기화 완료");

    start_http_server(config, user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: AppConfig,
    user_service: web::Data<UserService>,
) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "Rate Limiting 설정이 잘못되었습니다 (0은 허용되지 않음)",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second, config.rate_limit.burst_size
    );

    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(config.server.workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 남깁니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("[{}] env 파일 로드 실패: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=user_resource_service=debug cargo run
/// ```
fn init_logging(environment: &Environment) {
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}

/// 설정된 백엔드의 사용자 저장소를 생성합니다
///
/// MongoDB 연결에 실패하면 서버를 시작하지 않습니다.
async fn initialize_store(config: &AppConfig) -> io::Result<Arc<dyn UserStore>> {
    match config.database.backend {
        StorageBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용: 재시작 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new(&config.database).await.map_err(|e| {
                error!("❌ MongoDB 연결 실패: {}", e);
                io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
            })?;

            Ok(Arc::new(MongoUserRepository::new(&database)))
        }
    }
}

/// CORS 설정을 구성합니다
fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
