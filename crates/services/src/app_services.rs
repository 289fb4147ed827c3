use std::sync::Arc;

use crate::Clock;
use crate::question_service::{QuestionConfig, QuestionService};

/// Assembles the collaborators the UI needs.
#[derive(Clone)]
pub struct AppServices {
    questions: Arc<QuestionService>,
}

impl AppServices {
    /// Build services from the process environment.
    #[must_use]
    pub fn from_env(clock: Clock) -> Self {
        Self::new(QuestionConfig::from_env(), clock)
    }

    #[must_use]
    pub fn new(config: Option<QuestionConfig>, clock: Clock) -> Self {
        Self {
            questions: Arc::new(QuestionService::new(config).with_clock(clock)),
        }
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }
}
