use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Theme;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question content is blank")]
    EmptyContent,
}

/// A single "Name 3 ..." prompt. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    theme: Theme,
    content: String,
}

impl Question {
    /// Create a question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyContent` if the content is blank.
    pub fn new(
        id: impl Into<String>,
        theme: Theme,
        content: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(QuestionError::EmptyContent);
        }
        Ok(Self {
            id: id.into(),
            theme,
            content,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
