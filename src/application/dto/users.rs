use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public projection of a user, shared by the single-item and list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    #[schema(example = 7)]
    pub id: i64,
    #[schema(example = "Ana")]
    pub name: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            name: user.name.into(),
        }
    }
}
