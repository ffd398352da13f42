use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post};
use crate::domain::post::search::PageRequest;
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

/// Change applied to a stored post inside the store's transaction.
pub type PostMutation = Box<dyn FnOnce(&mut Post) + Send>;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    /// Load, mutate and write back one post as a single atomic step.
    /// Returns `None` when the post does not exist; nothing is created then.
    async fn modify(&self, id: PostId, mutation: PostMutation) -> DomainResult<Option<Post>>;

    /// Returns whether a post was removed.
    async fn delete(&self, id: PostId) -> DomainResult<bool>;

    async fn delete_all(&self) -> DomainResult<u64>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn list_page(&self, page: PageRequest) -> DomainResult<Vec<Post>>;
    async fn count(&self) -> DomainResult<u64>;
}
