//! 데이터베이스 및 서버 설정
//!
//! 환경 변수에서 서버 바인딩 정보와 MongoDB 연결 정보를 읽어옵니다.
//! 모든 값은 환경 변수가 없을 때 개발용 기본값으로 대체됩니다.

use std::env;

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 바인딩 주소를 "host:port" 형식으로 반환합니다.
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// MongoDB 연결 설정
pub struct MongoConfig;

impl MongoConfig {
    /// MongoDB 연결 URI를 반환합니다.
    ///
    /// # Returns
    ///
    /// 연결 URI. 기본값: "mongodb://localhost:27017"
    ///
    /// # Environment Variables
    ///
    /// - `MONGODB_URI`: 커스텀 연결 URI 설정
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름을 반환합니다.
    ///
    /// # Returns
    ///
    /// 데이터베이스 이름. 기본값: "user_service_dev"
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_NAME`: 커스텀 데이터베이스 이름 설정
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_service_dev".to_string())
    }

    /// 모니터링에 사용하는 애플리케이션 이름을 반환합니다.
    pub fn app_name() -> String {
        "user_service".to_string()
    }
}
