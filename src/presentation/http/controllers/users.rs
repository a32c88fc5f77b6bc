// src/presentation/http/controllers/users.rs
use crate::application::{
    ApplicationResult, dto::UserDto, queries::users::ListUserUseCase,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use std::sync::Arc;

/// `/users`: forwards the list use-case as is, with no logging and no error
/// translation.
pub struct UsersController {
    list_user_use_case: Arc<dyn ListUserUseCase>,
}

impl UsersController {
    pub fn new(list_user_use_case: Arc<dyn ListUserUseCase>) -> Self {
        Self { list_user_use_case }
    }

    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        self.list_user_use_case.execute().await
    }
}

#[utoipa::path(
    get,
    path = "/users",
    operation_id = "users_list_users",
    responses(
        (status = 200, description = "Lista de usuários", body = [UserDto]),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<UserDto>>> {
    state.users_controller.list_users().await.into_http().map(Json)
}
