use super::PostQueryService;
use crate::application::{
    dto::PostDto,
    error::{ApplicationError, ApplicationResult},
    ids::existing_post_id,
};

pub struct GetPostQuery {
    pub id: i64,
}

impl PostQueryService {
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<PostDto> {
        let id = existing_post_id(query.id)?;
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::post_not_found)?;
        Ok(post.into())
    }
}
