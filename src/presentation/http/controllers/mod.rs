// src/presentation/http/controllers/mod.rs
pub mod user;
pub mod users;
