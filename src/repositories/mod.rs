//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 도메인 계층의 리포지토리 계약을 문서 저장소 클라이언트에 바인딩합니다.

pub mod users;
