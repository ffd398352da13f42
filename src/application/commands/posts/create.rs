// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        errors::validate_both,
        post::{Post, PostContent, PostId},
    },
};

/// Fields are optional so that a missing field is reported like an empty one.
#[derive(Debug, Clone, Default)]
pub struct CreatePostCommand {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreatePostCommand {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}

impl PostCommandService {
    /// Store a new post and return the id the store issued for it.
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostId> {
        let title = self.parse_title(command.title.unwrap_or_default());
        let content = PostContent::new(command.content.unwrap_or_default());
        let (title, content) = validate_both(title, content)?;

        let created = self.write_repo.insert(Post::create(title, content)).await?;
        Ok(created.id)
    }
}
