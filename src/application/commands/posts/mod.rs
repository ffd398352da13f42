// src/application/commands/posts/mod.rs
mod create;
mod delete;
mod edit;
mod service;

pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use edit::EditPostCommand;
pub use service::PostCommandService;
