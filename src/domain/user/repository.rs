use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::User, value_objects::UserId};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users, ordered by id.
    async fn list(&self) -> DomainResult<Vec<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
}
