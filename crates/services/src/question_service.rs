use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use quiz_core::Clock;
use quiz_core::model::{Question, Theme};

use crate::error::QuestionProviderError;

/// How many questions one fetch asks the model for.
const QUESTIONS_PER_THEME: usize = 5;

#[derive(Clone, Debug)]
pub struct QuestionConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl QuestionConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("QUIZ_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("QUIZ_AI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("QUIZ_AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Generates "Name 3 ..." prompts for a theme.
///
/// With no config the service is disabled and serves the fallback set only.
#[derive(Clone)]
pub struct QuestionService {
    client: Client,
    config: Option<QuestionConfig>,
    clock: Clock,
}

impl QuestionService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(QuestionConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<QuestionConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
            clock: Clock::default_clock(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Fetch a question set for the theme.
    ///
    /// Never fails: any provider problem is logged and replaced by the fixed
    /// fallback set, so callers need no error path.
    pub async fn fetch_questions(&self, theme: Theme) -> Vec<Question> {
        match self.request_questions(theme).await {
            Ok(questions) => questions,
            Err(err) => {
                warn!(theme = theme.key(), error = %err, "question fetch failed, serving fallback set");
                fallback_questions(theme)
            }
        }
    }

    async fn request_questions(
        &self,
        theme: Theme,
    ) -> Result<Vec<Question>, QuestionProviderError> {
        let config = self.config.as_ref().ok_or(QuestionProviderError::Disabled)?;

        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: question_prompt(theme),
            }],
            temperature: 0.8,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuestionProviderError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(QuestionProviderError::EmptyResponse)?;

        let generated: Vec<GeneratedQuestion> = serde_json::from_str(content.trim())?;
        let stamp = self.clock.now().timestamp_millis();
        let questions: Vec<Question> = generated
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                Question::new(format!("{}-{stamp}-{index}", theme.key()), theme, item.content).ok()
            })
            .collect();

        if questions.is_empty() {
            return Err(QuestionProviderError::EmptyResponse);
        }
        Ok(questions)
    }
}

fn question_prompt(theme: Theme) -> String {
    format!(
        "You are a biology teacher preparing the party game 'six seconds'. \
         Generate {QUESTIONS_PER_THEME} unique questions for the theme: {theme}. \
         Every question MUST begin with \"Name 3\" and must be answerable within \
         6 seconds by a well-prepared student.\n\
         Examples:\n\
         - Name 3 organelles in a plant cell.\n\
         - Name 3 base pairs in DNA.\n\
         - Name 3 parts of the scientific method.\n\
         - Name 3 stages of the cell cycle.\n\
         Respond with only a JSON array of objects shaped like \
         {{\"content\": \"Name 3 ...\"}}."
    )
}

/// Fixed offline question set.
///
/// Intentionally shorter than a generated set; a fallback game simply ends
/// at question 3 of 3.
#[must_use]
pub fn fallback_questions(theme: Theme) -> Vec<Question> {
    [
        "Name 3 organelles of a cell.",
        "Name 3 types of proteins.",
        "Name 3 steps in osmosis.",
    ]
    .into_iter()
    .enumerate()
    .filter_map(|(index, content)| {
        Question::new(format!("{}-fallback-{}", theme.key(), index + 1), theme, content).ok()
    })
    .collect()
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeneratedQuestion {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_set_is_nonempty_and_on_pattern() {
        let questions = fallback_questions(Theme::Heredity);
        assert_eq!(questions.len(), 3);
        for question in &questions {
            assert_eq!(question.theme(), Theme::Heredity);
            assert!(question.content().starts_with("Name 3"));
        }
    }

    #[test]
    fn fallback_ids_are_unique() {
        let questions = fallback_questions(Theme::Dna);
        let mut ids: Vec<_> = questions.iter().map(Question::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn prompt_pins_the_theme_and_pattern() {
        let prompt = question_prompt(Theme::Metabolism);
        assert!(prompt.contains("Theme 8: Metabolism in the Cell"));
        assert!(prompt.contains("Name 3"));
    }

    #[tokio::test]
    async fn disabled_service_serves_fallback() {
        let service = QuestionService::new(None);
        assert!(!service.enabled());

        let questions = service.fetch_questions(Theme::Introduction).await;
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.theme() == Theme::Introduction));
    }

    #[test]
    fn generated_payload_parses() {
        let content = r#"[{"content": "Name 3 enzymes."}, {"content": "Name 3 sugars."}]"#;
        let parsed: Vec<GeneratedQuestion> = serde_json::from_str(content).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].content, "Name 3 enzymes.");
    }
}
