//! # User Resource HTTP Handlers
//!
//! 사용자 리소스 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 요청 디코딩과 응답 형태 결정만 담당하고 로직은 [`UserService`]에 위임합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `GET` | `/users` | 200 레코드 배열 | - |
//! | `POST` | `/users` | 201 생성된 레코드 | 422 `{"errors": [...]}`, 400 깨진 JSON |
//! | `PUT` | `/users/{id}` | 200 교체된 레코드 | 422, 404 |
//! | `PATCH` | `/users/{id}` | 200 수정된 레코드 | 404 `{"detail": ...}`, 422 |
//! | `DELETE` | `/users/{id}` | 200 `{"message": "User deleted successfully"}` | 404 `{"detail": ...}` |
//!
//! ## 입력 검증
//!
//! POST/PUT 본문은 서비스 호출 전에 [`UserData::from_fields`]로 전체 스키마 검증을 거칩니다.
//! PATCH 본문은 변경할 필드만 담으므로 검증 없이 서비스로 넘기고,
//! 서비스가 기존 레코드와 병합한 뒤 검증합니다.

use actix_web::{delete, get, patch, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UserData;
use crate::domain::dto::users::response::MessageResponse;
use crate::domain::models::field_map::FieldMap;
use crate::services::users::user_service::UserService;

#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<FieldMap>,
) -> Result<HttpResponse, AppError> {
    let data = UserData::from_fields(&payload).map_err(AppError::Unprocessable)?;

    let user = service.create_user(data).await?;

    Ok(HttpResponse::Created().json(user))
}

#[put("/{user_id}")]
pub async fn replace_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
    payload: web::Json<FieldMap>,
) -> Result<HttpResponse, AppError> {
    let data = UserData::from_fields(&payload).map_err(AppError::Unprocessable)?;

    let user = service.replace_user(user_id.into_inner(), data).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 부분 수정
///
/// 본문은 임의의 JSON 객체이며, 있는 키만 기존 값을 덮어씁니다.
#[patch("/{user_id}")]
pub async fn patch_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
    payload: web::Json<FieldMap>,
) -> Result<HttpResponse, AppError> {
    let user = service
        .patch_user(user_id.into_inner(), payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제
///
/// 본문 없는 204 대신 확인 메시지를 담아 200으로 응답합니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::user_deleted()))
}
