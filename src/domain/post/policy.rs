// src/domain/post/policy.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::PostTitle;

/// Words a title may not contain. Matching is case-insensitive and by substring.
#[derive(Debug, Clone, Default)]
pub struct TitlePolicy {
    forbidden_words: Vec<String>,
}

impl TitlePolicy {
    pub fn new<I, S>(forbidden_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let forbidden_words = forbidden_words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { forbidden_words }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.forbidden_words.is_empty()
    }

    pub fn check(&self, title: &PostTitle) -> DomainResult<()> {
        let lowered = title.as_str().to_lowercase();
        match self
            .forbidden_words
            .iter()
            .find(|word| lowered.contains(word.as_str()))
        {
            Some(word) => Err(DomainError::invalid_field(
                "title",
                format!("title must not contain \"{word}\""),
            )),
            None => Ok(()),
        }
    }
}
