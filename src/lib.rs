//! 사용자 CRUD 백엔드 서비스
//!
//! 클린 아키텍처 레이어링을 따르는 Rust 기반의 사용자 관리 마이크로서비스입니다.
//! Actix-web 기반의 REST API와 MongoDB 문서 저장소를 사용하며,
//! 의존성은 생성자를 통해 명시적으로 주입됩니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: 목록 조회, 단건 조회, 생성, 수정(전체 교체), 삭제
//! - **MongoDB**: 사용자 데이터 영구 저장 (저장소가 식별자 할당)
//! - **명시적 DI**: 프레임워크 매직 없이 생성자 기반 의존성 주입
//! - **레이어 분리**: 핸들러 → 서비스 → 리포지토리 계약 → Mongo 어댑터
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/users)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 애플리케이션 로직 (위임)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 리포지토리 계약 + MongoDB 어댑터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    MongoDB      │ ← 문서 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::db::Database;
//! use user_service_backend::repositories::users::user_repo::MongoUserRepository;
//! use user_service_backend::services::users::user_service::UserService;
//!
//! let database = Arc::new(Database::new().await?);
//! let repository = Arc::new(MongoUserRepository::new(database));
//! let service = UserService::new(repository);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
