//! 사용자 요청 DTO
//!
//! 사용자 생성과 수정에 공통으로 사용하는 HTTP 요청 본문 구조입니다.
//! 식별자는 경로에서만 받으므로 본문에는 포함되지 않습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::user::User;

/// 사용자 생성/수정 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 검증은 필드 존재 여부 수준으로, 빈 문자열만 거부합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserRequest {
    /// 사용자 이름 (필수)
    #[validate(length(min = 1, message = "이름은 비어 있을 수 없습니다"))]
    pub name: String,

    /// 사용자 이메일 (필수)
    #[validate(length(min = 1, message = "이메일은 비어 있을 수 없습니다"))]
    pub email: String,
}

impl UserRequest {
    /// 요청 본문을 아직 영속화되지 않은 엔티티로 변환합니다.
    pub fn into_entity(self) -> User {
        User::new(self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes_validation() {
        let request = UserRequest {
            name: "Alice".to_string(),
            email: "a@example.com".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let request = UserRequest {
            name: String::new(),
            email: "a@example.com".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_email_fails_validation() {
        let request = UserRequest {
            name: "Alice".to_string(),
            email: String::new(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_entity_leaves_id_unassigned() {
        let request = UserRequest {
            name: "Alice".to_string(),
            email: "a@example.com".to_string(),
        };

        let user = request.into_entity();
        assert!(user.id.is_none());
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "a@example.com");
    }
}
