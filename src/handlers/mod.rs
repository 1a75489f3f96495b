//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - 요청 디코딩, 응답 형태      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 병합/검증, 저장소 위임              ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore 구현체               ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UserService>`로 서비스를 주입받고,
//! `Result<HttpResponse, AppError>`를 반환해 에러를 자동으로 HTTP 응답으로 변환합니다.
//!
//! ```rust,ignore
//! #[get("")]
//! pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
//!     let users = service.list_users().await?;
//!     Ok(HttpResponse::Ok().json(users))
//! }
//! ```

pub mod users;
