//! # User Management HTTP Handlers
//!
//! 사용자 CRUD와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! RESTful API 설계 원칙을 따르며, 각 핸들러는 검증과 상태 코드 선택만
//! 수행하고 나머지는 서비스 계층에 위임합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 조회 | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 OK / 404 Not Found |
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `PUT` | `/users/{id}` | 사용자 전체 교체 (upsert) | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 (멱등) | 204 No Content |
//!
//! 서비스는 `web::Data<UserService>`로 주입받으며, 싱글톤이나
//! 서비스 로케이터 없이 `main`에서 명시적으로 구성됩니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::UserRequest;
use crate::errors::AppError;
use crate::services::users::user_service::UserService;

/// 사용자 목록 조회 핸들러
///
/// `GET /users` — 모든 사용자를 저장소 고유 순서로 반환합니다.
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.get_all_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회 핸들러
///
/// `GET /users/{user_id}` — 사용자가 없으면 본문 없는 404를 반환합니다.
/// 부재는 서비스 계층까지 `None`으로 전달되며, HTTP 경계에서만
/// 상태 코드로 표현됩니다.
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    match service.get_user_by_id(&user_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// 사용자 생성 핸들러
///
/// `POST /users` — 본문의 이름/이메일로 새 사용자를 생성합니다.
/// 식별자는 저장소가 할당하며, 할당된 ID를 포함한 결과를
/// 201 Created로 반환합니다.
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 수정 핸들러
///
/// `PUT /users/{user_id}` — 경로 ID 기준으로 문서 전체를 교체합니다.
/// 본문의 ID는 무시되며, 존재하지 않는 ID에 쓰면 새 문서가
/// 생성됩니다 (저장소의 upsert 의미론).
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /users/{user_id}` — 멱등 연산으로, 없는 ID를 삭제해도
/// 204 No Content를 반환합니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
