//! # Application Error System
//!
//! 사용자 리소스 서비스 전역에서 사용하는 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 핸들러가 반환한 에러가 곧바로 HTTP 응답으로 변환됩니다.
//!
//! ## 응답 형식
//!
//! | 변형 | 상태 코드 | 본문 |
//! |------|-----------|------|
//! | `NotFound` | 404 | `{"detail": "User not found"}` |
//! | `Unprocessable` | 422 | `{"errors": [{"field", "code", "message"}]}` |
//! | `BadRequest` | 400 | `{"detail": "..."}` |
//! | `DatabaseError`, `InternalError` | 500 | `{"detail": "Internal server error"}` |
//!
//! 5xx 에러의 상세 메시지는 서버 로그에만 기록되고 클라이언트에는 노출되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(store: &dyn UserStore, id: i64) -> AppResult<UserRecord> {
//!     store.fetch_one(id).await?.ok_or_else(AppError::user_not_found)
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::dto::users::response::{DetailResponse, ErrorListResponse};
use crate::domain::models::validation::FieldErrors;

/// 존재하지 않는 사용자에 대한 응답 메시지
pub const USER_NOT_FOUND: &str = "User not found";

/// 애플리케이션 전역 에러 타입
///
/// 로컬에서 인식하는 실패는 `NotFound`와 `Unprocessable` 두 가지뿐이며,
/// 나머지는 저장소나 런타임에서 올라온 에러를 그대로 감싸 500으로 응답합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// MongoDB 연결 실패, 쿼리 실행 실패 등 저장소 계층에서 발생합니다.
    ///
    /// ```rust,ignore
    /// collection.find_one(filter).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 요청 본문 파싱 실패 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 스키마 검증 실패 (422 Unprocessable Entity)
    ///
    /// 필드별 에러 목록을 그대로 응답 본문에 담습니다.
    #[error("Validation failed: {0}")]
    Unprocessable(FieldErrors),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 사용자 404 에러를 생성합니다.
    pub fn user_not_found() -> Self {
        AppError::NotFound(USER_NOT_FOUND.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 404와 400은 `detail` 메시지를, 422는 필드 에러 목록을 본문으로 사용합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::NotFound(detail) | AppError::BadRequest(detail) => {
                HttpResponse::build(status).json(DetailResponse::new(detail.clone()))
            }
            AppError::Unprocessable(errors) => {
                HttpResponse::build(status).json(ErrorListResponse::new(errors.clone()))
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("❌ 요청 처리 실패: {}", self);
                HttpResponse::build(status).json(DetailResponse::new("Internal server error"))
            }
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
