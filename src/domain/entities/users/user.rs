//! User Entity Implementation
//!
//! 시스템의 유일한 영속 엔티티인 사용자 모델을 정의합니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 문서 저장소의 `users` 컬렉션에 저장되는 핵심 도메인 엔티티입니다.
/// `id`는 최초 영속화 이전에만 `None`이며, 저장소가 할당한 이후에는
/// 변하지 않는 식별자입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일
    pub email: String,
}

impl User {
    /// 아직 영속화되지 않은 새 사용자 생성
    ///
    /// ID는 저장 시점에 저장소가 할당합니다.
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: None,
            name,
            email,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_unsaved_user_serializes_without_id() {
        let user = User::new("Alice".to_string(), "a@example.com".to_string());
        let doc = bson::to_document(&user).unwrap();

        assert!(!doc.contains_key("_id"));
        assert_eq!(doc.get_str("name").unwrap(), "Alice");
        assert_eq!(doc.get_str("email").unwrap(), "a@example.com");
    }

    #[test]
    fn test_persisted_user_serializes_with_object_id() {
        let object_id = ObjectId::new();
        let user = User {
            id: Some(object_id),
            name: "Bob".to_string(),
            email: "b@example.com".to_string(),
        };

        let doc = bson::to_document(&user).unwrap();
        assert_eq!(doc.get_object_id("_id").unwrap(), object_id);
    }

    #[test]
    fn test_user_roundtrips_through_bson() {
        let user = User {
            id: Some(ObjectId::new()),
            name: "Carol".to_string(),
            email: "c@example.com".to_string(),
        };

        let doc = bson::to_document(&user).unwrap();
        let decoded: User = bson::from_document(doc).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_id_string_is_hex_representation() {
        let object_id = ObjectId::new();
        let user = User {
            id: Some(object_id),
            name: "Dave".to_string(),
            email: "d@example.com".to_string(),
        };

        assert_eq!(user.id_string(), Some(object_id.to_hex()));
        assert_eq!(User::new(String::new(), String::new()).id_string(), None);
    }
}
