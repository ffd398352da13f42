// src/domain/post/editor.rs
use crate::domain::post::entity::Post;
use crate::domain::post::value_objects::{PostContent, PostTitle};

/// Resolved title and content for a single edit.
///
/// Built from the current post with the supplied fields laid over it. A field
/// that was not supplied keeps its current value; it is never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEditor {
    pub title: PostTitle,
    pub content: PostContent,
}

impl PostEditor {
    pub fn merge(
        current: &Post,
        title: Option<PostTitle>,
        content: Option<PostContent>,
    ) -> Self {
        Self {
            title: title.unwrap_or_else(|| current.title.clone()),
            content: content.unwrap_or_else(|| current.content.clone()),
        }
    }
}
