// src/presentation/http/state.rs
use crate::application::{ports::logging::Logger, services::ApplicationServices};
use crate::presentation::http::controllers::{user::UserController, users::UsersController};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub user_controller: Arc<UserController>,
    pub users_controller: Arc<UsersController>,
}

impl HttpState {
    /// `logger` is handed to the controllers that log; `UsersController` takes none.
    pub fn new(services: &ApplicationServices, logger: Arc<dyn Logger>) -> Self {
        let user_controller = UserController::new(
            Arc::clone(&services.list_users),
            Arc::clone(&services.find_user_by_id),
            logger,
        );
        let users_controller = UsersController::new(Arc::clone(&services.list_users));

        Self {
            user_controller: Arc::new(user_controller),
            users_controller: Arc::new(users_controller),
        }
    }
}
