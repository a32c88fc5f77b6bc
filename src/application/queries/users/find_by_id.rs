use super::FindUserByIdUseCase;
use crate::{
    application::{ApplicationResult, dto::UserDto, error::ApplicationError},
    domain::user::{UserId, UserRepository},
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct FindUserById {
    user_repo: Arc<dyn UserRepository>,
}

impl FindUserById {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl FindUserByIdUseCase for FindUserById {
    async fn execute(&self, id: i64) -> ApplicationResult<UserDto> {
        self.user_repo
            .find_by_id(UserId::from(id))
            .await?
            .map(UserDto::from)
            .ok_or_else(|| ApplicationError::not_found(format!("user {id} not found")))
    }
}
