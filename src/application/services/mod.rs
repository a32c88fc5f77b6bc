// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::queries::users::{
        FindUserById, FindUserByIdUseCase, ListUserUseCase, ListUsers,
    },
    domain::user::UserRepository,
};

/// Use-cases shared by the HTTP controllers.
#[derive(Clone)]
pub struct ApplicationServices {
    pub list_users: Arc<dyn ListUserUseCase>,
    pub find_user_by_id: Arc<dyn FindUserByIdUseCase>,
}

impl ApplicationServices {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            list_users: Arc::new(ListUsers::new(Arc::clone(&user_repo))),
            find_user_by_id: Arc::new(FindUserById::new(user_repo)),
        }
    }

    /// Assemble the container from already-built use-cases (alternative
    /// implementations, test doubles).
    pub fn from_use_cases(
        list_users: Arc<dyn ListUserUseCase>,
        find_user_by_id: Arc<dyn FindUserByIdUseCase>,
    ) -> Self {
        Self {
            list_users,
            find_user_by_id,
        }
    }
}
