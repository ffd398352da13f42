// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ids::existing_post_id,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let id = existing_post_id(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(ApplicationError::post_not_found)?;

        // Someone else may have removed it since the lookup.
        if !self.write_repo.delete(id).await? {
            return Err(ApplicationError::post_not_found());
        }
        Ok(())
    }
}
