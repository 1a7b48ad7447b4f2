use async_trait::async_trait;
use basearch_api::AccessResult;
use uuid::Uuid;

use crate::accessor::{EntityAccessor, EntityStore};
use crate::models::user::UserModel;
use crate::repository::find_all::FindAll;
use crate::repository::find_by_id::FindById;

pub struct UserRepositoryImpl {
    pub users: EntityAccessor<UserModel>,
}

impl UserRepositoryImpl {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            users: store.entity::<UserModel>(),
        }
    }
}

#[async_trait]
impl FindById<UserModel> for UserRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AccessResult<Option<UserModel>> {
        self.users.by_id(id).await
    }
}

#[async_trait]
impl FindAll<UserModel> for UserRepositoryImpl {
    async fn find_all(&self) -> AccessResult<Vec<UserModel>> {
        self.users.list_all().await
    }
}
