use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{User, UserId, UserName, UserRepository};
use async_trait::async_trait;
use serde::Deserialize;
use std::{collections::BTreeMap, path::Path};

/// Read-only user store used when no database is configured.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: BTreeMap<UserId, User>,
}

#[derive(Debug, Deserialize)]
struct SeedUser {
    id: i64,
    name: String,
}

impl InMemoryUserRepository {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|user| (user.id, user)).collect(),
        }
    }

    /// Parse a JSON array of `{ "id": .., "name": .. }` objects.
    pub fn from_seed_json(json: &str) -> DomainResult<Self> {
        let seeds: Vec<SeedUser> = serde_json::from_str(json)
            .map_err(|err| DomainError::Validation(format!("invalid user seed: {err}")))?;

        let mut users = BTreeMap::new();
        for seed in seeds {
            let id = UserId(seed.id);
            if users.contains_key(&id) {
                return Err(DomainError::Validation(format!(
                    "duplicate user id {id} in seed"
                )));
            }
            users.insert(id, User::new(id, UserName::new(seed.name)?));
        }

        Ok(Self { users })
    }

    pub fn from_seed_file(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            DomainError::Persistence(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_seed_json(&json)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).cloned())
    }
}
