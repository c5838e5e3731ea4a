//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! 모든 설정은 개발 환경에서 안전한 기본값을 가집니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB 설정
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_service_dev"
//! ```

pub mod data_config;

pub use data_config::*;
