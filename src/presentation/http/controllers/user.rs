// src/presentation/http/controllers/user.rs
use crate::application::{
    dto::UserDto,
    ports::logging::Logger,
    queries::users::{FindUserByIdUseCase, ListUserUseCase},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, NotFoundResponseDto};
use crate::presentation::http::extractors::UserIdParam;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use std::sync::Arc;

/// `/user`: list and lookup with entry/exit logging. Lookup failures that mean
/// "no such user" become a 404; everything else is logged and passed on.
pub struct UserController {
    list_user_use_case: Arc<dyn ListUserUseCase>,
    find_user_by_id_use_case: Arc<dyn FindUserByIdUseCase>,
    logger: Arc<dyn Logger>,
}

impl UserController {
    pub const NAME: &'static str = "UserController";

    pub fn new(
        list_user_use_case: Arc<dyn ListUserUseCase>,
        find_user_by_id_use_case: Arc<dyn FindUserByIdUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            list_user_use_case,
            find_user_by_id_use_case,
            logger,
        }
    }

    pub async fn list_users(&self) -> HttpResult<Vec<UserDto>> {
        self.logger.log("listUsers | execution started");

        match self.list_user_use_case.execute().await {
            Ok(users) => {
                self.logger.log(&format!(
                    "listUsers | finished execution | number of users: {}",
                    users.len()
                ));
                Ok(users)
            }
            Err(err) => {
                self.logger.error("listUsers | execution with error", &err);
                Err(HttpError::from_error(err))
            }
        }
    }

    pub async fn find_user_by_id(&self, user_id: i64) -> HttpResult<UserDto> {
        self.logger
            .log(&format!("findUserById | execution started | userId: {user_id}"));

        match self.find_user_by_id_use_case.execute(user_id).await {
            Ok(user) => {
                let rendered =
                    serde_json::to_string(&user).unwrap_or_else(|_| format!("{user:?}"));
                self.logger.log(&format!(
                    "findUserById | finished execution | userId: {user_id} | user: {rendered}"
                ));
                Ok(user)
            }
            Err(err) => {
                self.logger.error(
                    &format!("findUserById | execution with error | userId: {user_id}"),
                    &err,
                );
                Err(HttpError::translate_not_found(err))
            }
        }
    }
}

#[utoipa::path(
    get,
    path = "/user/list",
    responses(
        (status = 200, description = "users list", body = [UserDto]),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "user"
)]
pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<UserDto>>> {
    state.user_controller.list_users().await.map(Json)
}

#[utoipa::path(
    get,
    path = "/user/find/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "find user by id", body = UserDto),
        (status = 400, description = "id is not an integer", body = ErrorResponse),
        (status = 404, description = "user not found by id", body = NotFoundResponseDto),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    ),
    tag = "user"
)]
pub async fn find_user_by_id(
    Extension(state): Extension<HttpState>,
    UserIdParam(user_id): UserIdParam,
) -> HttpResult<Json<UserDto>> {
    state.user_controller.find_user_by_id(user_id).await.map(Json)
}
