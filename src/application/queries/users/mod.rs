// src/application/queries/users/mod.rs
mod find_by_id;
mod list;

pub use find_by_id::FindUserById;
pub use list::ListUsers;

use crate::application::{ApplicationResult, dto::UserDto};
use async_trait::async_trait;

/// Lists every user visible to the HTTP layer.
#[async_trait]
pub trait ListUserUseCase: Send + Sync {
    async fn execute(&self) -> ApplicationResult<Vec<UserDto>>;
}

/// Looks up a single user. Fails with `ApplicationError::NotFound` when no
/// user carries the given id.
#[async_trait]
pub trait FindUserByIdUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> ApplicationResult<UserDto>;
}
