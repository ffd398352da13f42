// src/infrastructure/repositories/mod.rs
mod error;
mod memory_post;
mod sqlite_post;

pub use error::map_sqlx;
pub use memory_post::InMemoryPostRepository;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
