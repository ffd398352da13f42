// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::posts::PostCommandService, queries::posts::PostQueryService},
    domain::post::{PostReadRepository, PostWriteRepository, TitlePolicy},
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        title_policy: TitlePolicy,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            title_policy,
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        Self {
            post_commands,
            post_queries,
        }
    }
}
