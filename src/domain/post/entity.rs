// src/domain/post/entity.rs
use crate::domain::post::editor::PostEditor;
use crate::domain::post::value_objects::{PostContent, PostId, PostTitle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
}

impl Post {
    /// Start a post that has not been stored yet. The id is issued by the store on insert.
    pub fn create(title: PostTitle, content: PostContent) -> NewPost {
        NewPost { title, content }
    }

    /// Overwrite title and content with the editor's resolved values.
    ///
    /// Only the in-memory value changes; writing it back is up to the caller.
    pub fn edit(&mut self, editor: PostEditor) {
        let PostEditor { title, content } = editor;
        self.title = title;
        self.content = content;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: PostContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: PostId::new(1).unwrap(),
            title: PostTitle::new("foo").unwrap(),
            content: PostContent::new("bar").unwrap(),
        }
    }

    #[test]
    fn create_keeps_fields() {
        let new_post = Post::create(
            PostTitle::new("title").unwrap(),
            PostContent::new("content").unwrap(),
        );
        assert_eq!(new_post.title.as_str(), "title");
        assert_eq!(new_post.content.as_str(), "content");
    }

    #[test]
    fn edit_replaces_fields_but_not_id() {
        let mut post = sample_post();
        let editor = PostEditor {
            title: PostTitle::new("FOO").unwrap(),
            content: PostContent::new("BAR").unwrap(),
        };
        post.edit(editor);
        assert_eq!(i64::from(post.id), 1);
        assert_eq!(post.title.as_str(), "FOO");
        assert_eq!(post.content.as_str(), "BAR");
    }
}
