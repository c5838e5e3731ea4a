//! # Domain Layer Module
//!
//! 도메인 엔티티, DTO, 리포지토리 계약을 정의하는 계층입니다.
//! 이 계층은 저장소 구현이나 HTTP 프레임워크에 의존하지 않습니다.

pub mod dto;
pub mod entities;
pub mod repository;

pub use dto::users::request::UserRequest;
pub use dto::users::response::UserResponse;
pub use entities::users::user::User;
pub use repository::UserRepository;
