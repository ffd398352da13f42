// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::domain::{
    errors::DomainResult,
    post::{PostReadRepository, PostTitle, PostWriteRepository, TitlePolicy},
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) title_policy: TitlePolicy,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        title_policy: TitlePolicy,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            title_policy,
        }
    }

    pub(super) fn parse_title(&self, raw: String) -> DomainResult<PostTitle> {
        let title = PostTitle::new(raw)?;
        self.title_policy.check(&title)?;
        Ok(title)
    }
}
