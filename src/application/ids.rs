// src/application/ids.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::post::PostId;

/// Ids that can never have been issued by the store address nothing,
/// so they surface as not found rather than as malformed input.
pub(crate) fn existing_post_id(raw: i64) -> ApplicationResult<PostId> {
    PostId::new(raw).map_err(|_| ApplicationError::post_not_found())
}
