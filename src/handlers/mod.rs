//! HTTP 요청을 처리하는 핸들러 모듈

pub mod users;
