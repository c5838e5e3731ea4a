//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 도메인 계약([`UserRepository`])을 MongoDB `users` 컬렉션에 바인딩하며,
//! 쿼리 로직을 추가하지 않고 저장소의 의미론을 그대로 노출합니다.
//!
//! ## 특징
//!
//! - **저장소 할당 ID**: 삽입 시 MongoDB가 ObjectId를 자동 생성
//! - **전체 교체 upsert**: 수정은 경로 ID 기준의 문서 교체
//! - **멱등 삭제**: 없는 문서 삭제는 no-op
//! - **에러 투명성**: 저장소의 네이티브 에러를 가공 없이 전달

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{FindOneAndReplaceOptions, ReturnDocument};
use mongodb::Collection;

use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::domain::repository::UserRepository;
use crate::errors::{AppError, AppResult};

/// MongoDB 기반 사용자 리포지토리
///
/// 데이터베이스 연결 핸들을 보유하는 구체 어댑터입니다.
/// 생성자를 통해 명시적으로 주입받으며, `users` 컬렉션에 대한
/// 다섯 가지 CRUD 연산만을 구현합니다.
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoUserRepository {
    /// 사용자 컬렉션 이름
    const COLLECTION: &'static str = "users";

    /// 데이터베이스 핸들로부터 새 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    fn parse_object_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    /// 모든 사용자 조회
    ///
    /// 정렬을 지정하지 않으므로 저장소 고유 순서로 반환됩니다.
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// 문서가 없으면 `Ok(None)`을 반환합니다. 부재는 에러가 아닙니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = Self::parse_object_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 저장
    ///
    /// 클라이언트가 넘긴 ID는 무시하고 MongoDB가 할당한 ObjectId를
    /// 포함한 결과를 반환합니다.
    async fn insert(&self, mut user: User) -> AppResult<User> {
        // 식별자는 저장소가 할당한다
        user.id = None;

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 경로 ID 기준 문서 전체 교체
    ///
    /// `upsert: true`로 동작하므로 존재하지 않는 ID에 쓰면
    /// 해당 ID로 새 문서가 생성됩니다.
    async fn replace(&self, id: &str, mut user: User) -> AppResult<User> {
        let object_id = Self::parse_object_id(id)?;

        // 본문의 ID는 버리고 경로 ID를 식별자로 사용한다
        user.id = Some(object_id);

        let options = FindOneAndReplaceOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let replaced = self
            .collection()
            .find_one_and_replace(doc! { "_id": object_id }, &user)
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(replaced.unwrap_or(user))
    }

    /// ID로 사용자 삭제
    ///
    /// 삭제 건수를 확인하지 않습니다. 없는 문서에 대한 삭제는 no-op입니다.
    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let object_id = Self::parse_object_id(id)?;

        self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
