use thiserror::Error;

use crate::countdown::CountdownError;
use crate::model::{GameError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Countdown(#[from] CountdownError),
}
