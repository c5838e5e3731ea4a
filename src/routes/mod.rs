//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 어노테이션 기반 라우팅 대신 모든 라우트를 이 모듈에서
//! 명시적으로 등록합니다.
//!
//! # Features
//!
//! - 사용자 CRUD API 엔드포인트 (`/users`)
//! - 헬스체크 엔드포인트 (`/health`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//! use user_service_backend::routes::configure_all_routes;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 사용자 목록 조회, 단건 조회, 생성, 수정, 삭제 엔드포인트를 등록합니다.
///
/// # Routes
///
/// - `GET /users` - 사용자 목록 조회
/// - `GET /users/{id}` - 사용자 조회
/// - `POST /users` - 사용자 생성
/// - `PUT /users/{id}` - 사용자 전체 교체
/// - `DELETE /users/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Alice","email":"a@example.com"}'
///
/// curl http://localhost:8080/users
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "architecture": "Clean Architecture"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "architecture": "Clean Architecture"
        }
    }))
}
