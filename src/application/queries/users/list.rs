use super::ListUserUseCase;
use crate::{
    application::{ApplicationResult, dto::UserDto},
    domain::user::UserRepository,
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct ListUsers {
    user_repo: Arc<dyn UserRepository>,
}

impl ListUsers {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl ListUserUseCase for ListUsers {
    async fn execute(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{User, UserId, UserName};
    use crate::infrastructure::repositories::InMemoryUserRepository;

    #[tokio::test]
    async fn lists_users_in_id_order() {
        let repo = InMemoryUserRepository::new([
            User::new(UserId(9), UserName::new("Zoe").unwrap()),
            User::new(UserId(2), UserName::new("Bruno").unwrap()),
        ]);
        let use_case = ListUsers::new(Arc::new(repo));

        let users = use_case.execute().await.unwrap();
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 9]);
    }

    #[tokio::test]
    async fn empty_repository_yields_empty_list() {
        let use_case = ListUsers::new(Arc::new(InMemoryUserRepository::default()));
        assert!(use_case.execute().await.unwrap().is_empty());
    }
}
