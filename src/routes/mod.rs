//! API 라우트 설정 모듈
//!
//! 사용자 리소스 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;
use serde_json::error::Category;
use serde_json::json;

use crate::core::errors::AppError;
use crate::domain::models::validation::{FieldError, FieldErrors};
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 추출기 실패도 JSON 본문으로 응답하도록 추출기 설정을 함께 등록합니다.
///
/// * 문법이 깨진 본문 - `400 {"detail": ...}`
/// * 객체가 아닌 본문 (`[1]` 등) - `422 {"errors": [...]}`
/// * 정수가 아닌 경로 ID - `404 {"detail": "User not found"}`
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 리소스 라우트를 설정합니다
///
/// ```bash
/// curl http://localhost:8080/users
///
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ann","age":30}'
///
/// curl -X PATCH http://localhost:8080/users/1 \
///   -H "Content-Type: application/json" \
///   -d '{"age":31}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::replace_user)
            .service(handlers::users::patch_user)
            .service(handlers::users::delete_user),
    );
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    match &err {
        JsonPayloadError::Deserialize(e) if e.classify() == Category::Data => {
            let mut errors = FieldErrors::default();
            errors.push(FieldError::invalid_type("body", "object"));
            AppError::Unprocessable(errors).into()
        }
        _ => AppError::BadRequest(err.to_string()).into(),
    }
}

/// `/users/{user_id}`의 ID가 정수가 아니면 존재할 수 없는 사용자로 취급합니다.
fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!("경로 파라미터 파싱 실패: {} ({})", req.path(), err);
    AppError::user_not_found().into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_resource_service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_resource_service");
    }
}
