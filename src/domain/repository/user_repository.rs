//! 사용자 리포지토리 계약
//!
//! 도메인이 저장소에 요구하는 다섯 가지 연산만을 노출하는 좁은 계약입니다.
//! 구현체는 인프라 계층([`crate::repositories`])에 있으며, 서비스는
//! 이 트레이트를 통해서만 저장소에 접근합니다.

use async_trait::async_trait;

use crate::domain::entities::users::user::User;
use crate::errors::AppResult;

/// 사용자 저장소 계약
///
/// 모든 연산은 저장소의 자체 보장 수준으로 동작합니다.
/// 리소스의 부재는 에러가 아니라 `None`으로 표현합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 모든 사용자를 저장소 고유 순서로 조회합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// ID로 사용자를 조회합니다. 없으면 `Ok(None)`을 반환합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장합니다.
    ///
    /// 클라이언트가 넘긴 ID는 무시되고 저장소가 식별자를 할당합니다.
    /// 할당된 ID를 포함한 저장 결과를 반환합니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 경로 ID 기준으로 문서 전체를 교체합니다.
    ///
    /// 본문의 ID는 버려지고 경로 ID가 식별자가 됩니다.
    /// 존재하지 않는 ID에 쓰면 새 문서가 생성됩니다 (upsert).
    async fn replace(&self, id: &str, user: User) -> AppResult<User>;

    /// ID로 사용자를 삭제합니다. 없는 ID에 대해서는 아무 일도 하지 않습니다.
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;
}
