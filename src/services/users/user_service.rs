//! # 사용자 관리 서비스 구현
//!
//! 사용자 CRUD의 애플리케이션 로직을 담당하는 서비스입니다.
//! 각 메서드는 리포지토리 계약으로의 얇은 위임이며, 엔티티를
//! 응답 DTO로 변환하는 것 외의 의미론을 추가하지 않습니다.
//!
//! 리포지토리는 트레이트 객체로 주입받으므로 테스트에서는
//! 인메모리 구현으로 대체할 수 있습니다.

use std::sync::Arc;

use crate::domain::dto::users::request::UserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::repository::UserRepository;
use crate::errors::AppResult;

/// 사용자 애플리케이션 서비스
///
/// 생성자를 통해 리포지토리 계약을 주입받습니다.
/// HTTP 계층과 저장소 계층 사이에서 DTO 변환만을 수행합니다.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// 리포지토리 구현체로부터 새 서비스를 생성합니다.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// 모든 사용자를 조회합니다.
    ///
    /// 순서는 저장소 고유 순서를 따릅니다.
    pub async fn get_all_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자를 조회합니다.
    ///
    /// 부재는 `Ok(None)`으로 표현되며 에러가 아닙니다.
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<Option<UserResponse>> {
        let user = self.repo.find_by_id(id).await?;

        Ok(user.map(UserResponse::from))
    }

    /// 새 사용자를 생성합니다.
    ///
    /// 저장소가 할당한 ID를 포함한 결과를 반환합니다.
    pub async fn create_user(&self, request: UserRequest) -> AppResult<UserResponse> {
        let created = self.repo.insert(request.into_entity()).await?;

        Ok(UserResponse::from(created))
    }

    /// 경로 ID 기준으로 사용자를 전체 교체합니다.
    ///
    /// 존재하지 않는 ID에 쓰면 해당 ID로 새 문서가 생성됩니다 (upsert).
    pub async fn update_user(&self, id: &str, request: UserRequest) -> AppResult<UserResponse> {
        let updated = self.repo.replace(id, request.into_entity()).await?;

        Ok(UserResponse::from(updated))
    }

    /// ID로 사용자를 삭제합니다.
    ///
    /// 없는 ID에 대한 삭제는 성공으로 처리됩니다 (멱등).
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repository::user_repository::memory::InMemoryUserRepository;
    use crate::errors::AppError;
    use mongodb::bson::oid::ObjectId;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::default()))
    }

    fn request(name: &str, email: &str) -> UserRequest {
        UserRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_create_assigns_non_empty_id() {
        let service = service();

        let created = service
            .create_user(request("Alice", "a@example.com"))
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.name, "Alice");
        assert_eq!(created.email, "a@example.com");
    }

    #[actix_web::test]
    async fn test_get_after_create_returns_created_fields() {
        let service = service();

        let created = service
            .create_user(request("Alice", "a@example.com"))
            .await
            .unwrap();
        let found = service.get_user_by_id(&created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[actix_web::test]
    async fn test_get_unknown_id_returns_none() {
        let service = service();

        let found = service
            .get_user_by_id(&ObjectId::new().to_hex())
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[actix_web::test]
    async fn test_get_malformed_id_is_validation_error() {
        let service = service();

        let result = service.get_user_by_id("bogus").await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_update_replaces_all_fields() {
        let service = service();

        let created = service
            .create_user(request("Alice", "a@example.com"))
            .await
            .unwrap();
        let updated = service
            .update_user(&created.id, request("Alicia", "alicia@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Alicia");

        let found = service.get_user_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Alicia");
        assert_eq!(found.email, "alicia@example.com");
    }

    #[actix_web::test]
    async fn test_update_unknown_id_creates_record() {
        let service = service();
        let id = ObjectId::new().to_hex();

        let updated = service
            .update_user(&id, request("Bob", "b@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, id);

        let found = service.get_user_by_id(&id).await.unwrap();
        assert!(found.is_some());
    }

    #[actix_web::test]
    async fn test_delete_then_get_returns_none() {
        let service = service();

        let created = service
            .create_user(request("Alice", "a@example.com"))
            .await
            .unwrap();
        service.delete_user(&created.id).await.unwrap();

        let found = service.get_user_by_id(&created.id).await.unwrap();
        assert!(found.is_none());
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_is_noop() {
        let service = service();

        let result = service.delete_user(&ObjectId::new().to_hex()).await;

        assert!(result.is_ok());
    }

    #[actix_web::test]
    async fn test_list_contains_all_created_users() {
        let service = service();

        let first = service
            .create_user(request("Alice", "a@example.com"))
            .await
            .unwrap();
        let second = service
            .create_user(request("Bob", "b@example.com"))
            .await
            .unwrap();

        let all = service.get_all_users().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&first));
        assert!(all.contains(&second));

        // 목록의 각 항목은 개별 조회로도 도달 가능해야 한다
        for user in all {
            assert!(service.get_user_by_id(&user.id).await.unwrap().is_some());
        }
    }
}
