mod question;
mod score;
mod session;
mod theme;

pub use question::{Question, QuestionError};
pub use score::Score;
pub use session::{
    FetchTicket, GameError, GamePhase, GameSession, QuestionsApplied, RoundOutcome,
};
pub use theme::Theme;
