//! 사용자 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 엔티티의 ObjectId를 16진수 문자열로 변환하여 클라이언트에 노출합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let id = user.id_string().unwrap_or_default();
        let User { name, email, .. } = user;

        Self { id, name, email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_exposes_hex_id() {
        let object_id = ObjectId::new();
        let user = User {
            id: Some(object_id),
            name: "Alice".to_string(),
            email: "a@example.com".to_string(),
        };

        let response = UserResponse::from(user);
        assert_eq!(response.id, object_id.to_hex());
        assert_eq!(response.name, "Alice");
        assert_eq!(response.email, "a@example.com");
    }
}
