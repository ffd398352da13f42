use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, PageRequest, Post, PostContent, PostId, PostMutation, PostReadRepository,
    PostTitle, PostWriteRepository, SortField,
};
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            content: PostContent::new(row.content)?,
        })
    }
}

fn to_sql_int<T: TryInto<i64>>(value: T) -> i64 {
    value.try_into().unwrap_or(i64::MAX)
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost { title, content } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, content) VALUES (?, ?) RETURNING id, title, content",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        tracing::debug!(post_id = row.id, "post inserted");
        Post::try_from(row)
    }

    async fn modify(&self, id: PostId, mutation: PostMutation) -> DomainResult<Option<Post>> {
        // Write lock is held from the first read; concurrent writers wait on the busy timeout.
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(map_sqlx)?;

        let current = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content FROM posts WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        // Dropping the transaction without commit rolls it back.
        let Some(current) = current else {
            return Ok(None);
        };

        let mut post = Post::try_from(current)?;
        mutation(&mut post);

        let updated = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET title = ?, content = ? WHERE id = ? RETURNING id, title, content",
        )
        .bind(post.title.as_str())
        .bind(post.content.as_str())
        .bind(i64::from(id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let Some(updated) = updated else {
            return Ok(None);
        };

        tx.commit().await.map_err(map_sqlx)?;
        tracing::debug!(post_id = updated.id, "post updated");
        Post::try_from(updated).map(Some)
    }

    async fn delete(&self, id: PostId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let removed = result.rows_affected() > 0;
        tracing::debug!(post_id = %id, removed, "post delete");
        Ok(removed)
    }

    async fn delete_all(&self) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM posts")
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content FROM posts WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, title, content FROM posts ORDER BY ");
        builder.push(page.sort.field.column());
        builder.push(" ");
        builder.push(page.sort.direction.keyword());
        if page.sort.field != SortField::Id {
            builder.push(", id DESC");
        }
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(page.limit));
        builder.push(" OFFSET ");
        builder.push_bind(to_sql_int(page.offset));

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM posts")
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or(0))
    }
}
