// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory_user;
mod postgres_user;

pub(crate) use error::map_sqlx;
pub use in_memory_user::InMemoryUserRepository;
pub use postgres_user::PostgresUserRepository;
