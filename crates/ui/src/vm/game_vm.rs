use quiz_core::model::{GameError, GamePhase, GameSession, Question, Theme};
use services::QuestionService;
use tracing::debug;

/// Presentation-facing wrapper around the game session.
///
/// Out-of-phase calls are wiring bugs in the view layer; the vm drops them
/// and logs at debug level. The game itself has no error states.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameVm {
    session: GameSession,
}

impl GameVm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    #[must_use]
    pub fn theme_label(&self) -> Option<&'static str> {
        self.session.selected_theme().map(Theme::label)
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.session.current_question().map(Question::content)
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "Question {} of {}",
            self.session.question_number(),
            self.session.question_count()
        )
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        let score = self.session.score();
        format!("{} / {}", score.correct(), score.total())
    }

    pub fn start_game(&mut self) {
        drop_out_of_phase("start_game", self.session.start_game());
    }

    /// Pick a theme and resolve the question fetch.
    ///
    /// The session enters `Ready` in the loading state immediately; the
    /// fetched (or fallback) set is applied when the provider call settles,
    /// unless a reset invalidated the ticket in between.
    pub async fn select_theme(&mut self, questions: &QuestionService, theme: Theme) {
        let Some(ticket) = drop_out_of_phase("select_theme", self.session.select_theme(theme))
        else {
            return;
        };
        let fetched = questions.fetch_questions(theme).await;
        drop_out_of_phase("apply_questions", self.session.apply_questions(ticket, fetched));
    }

    /// Arm the round. Returns true when the caller should start the timer.
    pub fn begin_round(&mut self) -> bool {
        drop_out_of_phase("begin_round", self.session.begin_round()).is_some()
    }

    /// Consume the expiry signal. Returns true when the caller should buzz.
    pub fn expire_round(&mut self) -> bool {
        drop_out_of_phase("expire_round", self.session.expire_round()).is_some()
    }

    pub fn submit_result(&mut self, success: bool) {
        drop_out_of_phase("submit_result", self.session.submit_result(success));
    }

    /// Back to the start screen. The caller cancels any live timer.
    pub fn reset(&mut self) {
        drop_out_of_phase("reset", self.session.reset());
    }
}

fn drop_out_of_phase<T>(operation: &str, result: Result<T, GameError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(operation, error = %err, "ignored out-of-phase action");
            None
        }
    }
}
