// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{PostSearch, PostSort},
};

/// Raw listing parameters. `sort` uses the `field[,direction]` form, e.g. `id,desc`.
#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl ListPostsQuery {
    pub fn page(page: i64) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let sort = query
            .sort
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(str::parse::<PostSort>)
            .transpose()?;

        let search = PostSearch {
            page: query.page,
            size: query.size,
            sort,
        };

        let page = search.normalize();
        tracing::debug!(
            offset = page.offset,
            limit = page.limit,
            sort = %page.sort,
            "listing posts"
        );
        let posts = self.read_repo.list_page(page).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
