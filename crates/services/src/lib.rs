#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod question_service;
pub mod round_timer;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use error::QuestionProviderError;
pub use question_service::{QuestionConfig, QuestionService, fallback_questions};
pub use round_timer::{RoundTimer, TimerHandle};
