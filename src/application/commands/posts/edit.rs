use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
        ids::existing_post_id,
    },
    domain::{
        errors::validate_both,
        post::{Post, PostContent, PostEditor, PostMutation},
    },
};

/// `None` leaves the stored value as it is.
#[derive(Debug, Clone, Default)]
pub struct EditPostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostCommandService {
    pub async fn edit_post(&self, command: EditPostCommand) -> ApplicationResult<PostDto> {
        let EditPostCommand { id, title, content } = command;

        let title = title.map(|raw| self.parse_title(raw)).transpose();
        let content = content.map(PostContent::new).transpose();
        let (title, content) = validate_both(title, content)?;
        let id = existing_post_id(id)?;

        let mutation: PostMutation = Box::new(move |post: &mut Post| {
            let editor = PostEditor::merge(post, title, content);
            post.edit(editor);
        });

        let updated = self
            .write_repo
            .modify(id, mutation)
            .await?
            .ok_or_else(ApplicationError::post_not_found)?;
        Ok(updated.into())
    }
}
