// src/infrastructure/repositories/memory_post.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, PageRequest, Post, PostId, PostMutation, PostReadRepository, PostSort,
    PostWriteRepository, SortDirection, SortField,
};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Process-local post store. Every operation runs under one lock, so a
/// `modify` is atomic with respect to concurrent deletes and edits.
#[derive(Clone, Default)]
pub struct InMemoryPostRepository {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    posts: BTreeMap<PostId, Post>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory post store poisoned".into()))
    }
}

fn compare(sort: PostSort, a: &Post, b: &Post) -> Ordering {
    let by_id = a.id.cmp(&b.id);
    let primary = match sort.field {
        SortField::Id => by_id,
        SortField::Title => a.title.as_str().cmp(b.title.as_str()),
    };
    let primary = match sort.direction {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    };
    primary.then_with(|| by_id.reverse())
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.lock()?;
        state.last_id += 1;
        let stored = Post {
            id: PostId::new(state.last_id)?,
            title: post.title,
            content: post.content,
        };
        state.posts.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn modify(&self, id: PostId, mutation: PostMutation) -> DomainResult<Option<Post>> {
        let mut state = self.lock()?;
        let Some(current) = state.posts.get(&id) else {
            return Ok(None);
        };

        let mut post = current.clone();
        mutation(&mut post);
        post.id = id;
        state.posts.insert(id, post.clone());
        Ok(Some(post))
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        Ok(self.lock()?.posts.remove(&id).is_some())
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let mut state = self.lock()?;
        let removed = state.posts.len();
        state.posts.clear();
        Ok(u64::try_from(removed).unwrap_or(u64::MAX))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.lock()?.posts.get(&id).cloned())
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Vec<Post>> {
        let state = self.lock()?;
        let mut posts: Vec<&Post> = state.posts.values().collect();
        posts.sort_by(|a, b| compare(page.sort, a, b));

        let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        Ok(posts.into_iter().skip(offset).take(limit).cloned().collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        let total = self.lock()?.posts.len();
        Ok(u64::try_from(total).unwrap_or(u64::MAX))
    }
}
