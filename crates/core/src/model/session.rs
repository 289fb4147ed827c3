use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Question, Score, Theme};

/// The six mutually exclusive screens the session can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Start,
    ThemeSelection,
    Ready,
    Playing,
    Result,
    Summary,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Start => "start",
            GamePhase::ThemeSelection => "theme selection",
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::Result => "result",
            GamePhase::Summary => "summary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("operation is not valid in the {actual} phase")]
    InvalidPhase { actual: GamePhase },

    #[error("questions are still loading")]
    StillLoading,

    #[error("question set is empty")]
    EmptyQuestionSet,
}

/// Token tying a provider response to the fetch that requested it.
///
/// A reset bumps the session epoch, so a ticket issued before the reset no
/// longer matches and its response is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
}

/// Whether a provider response was stored or silently dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionsApplied {
    Applied,
    Stale,
}

/// Where the session goes after a judged round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    NextQuestion,
    Finished,
}

/// Authoritative session state and the legal transitions between screens.
///
/// There is exactly one `GameSession` per running game. All transitions are
/// synchronous; the one asynchronous step (the question fetch) is split into
/// [`GameSession::select_theme`] and [`GameSession::apply_questions`] so the
/// caller never holds a borrow across an await.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    phase: GamePhase,
    selected_theme: Option<Theme>,
    questions: Vec<Question>,
    current_index: usize,
    score: Score,
    loading: bool,
    fetch_epoch: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Start,
            selected_theme: None,
            questions: Vec::new(),
            current_index: 0,
            score: Score::new(),
            loading: false,
            fetch_epoch: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn selected_theme(&self) -> Option<Theme> {
        self.selected_theme
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    /// 1-based position of the current question, for "Question N of M".
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Leave the start screen.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` outside the `Start` phase.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Start)?;
        self.phase = GamePhase::ThemeSelection;
        Ok(())
    }

    /// Pick a theme and enter `Ready` in the loading state.
    ///
    /// The returned ticket must be passed to [`GameSession::apply_questions`]
    /// once the provider call settles. `Ready` plus `is_loading` renders as a
    /// loading overlay; [`GameSession::begin_round`] stays rejected until the
    /// questions arrive.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` outside the `ThemeSelection` phase.
    pub fn select_theme(&mut self, theme: Theme) -> Result<FetchTicket, GameError> {
        self.expect_phase(GamePhase::ThemeSelection)?;
        self.selected_theme = Some(theme);
        self.loading = true;
        self.phase = GamePhase::Ready;
        Ok(FetchTicket {
            epoch: self.fetch_epoch,
        })
    }

    /// Store a provider response, unless the session was reset in between.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyQuestionSet` for an empty list. The provider
    /// contract forbids that case, so hitting it is a provider bug.
    pub fn apply_questions(
        &mut self,
        ticket: FetchTicket,
        questions: Vec<Question>,
    ) -> Result<QuestionsApplied, GameError> {
        if ticket.epoch != self.fetch_epoch {
            return Ok(QuestionsApplied::Stale);
        }
        if questions.is_empty() {
            return Err(GameError::EmptyQuestionSet);
        }
        self.questions = questions;
        self.loading = false;
        Ok(QuestionsApplied::Applied)
    }

    /// Arm the current round. The caller starts exactly one countdown timer.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` outside `Ready`, and
    /// `GameError::StillLoading` while the question fetch is pending.
    pub fn begin_round(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Ready)?;
        if self.loading {
            return Err(GameError::StillLoading);
        }
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Consume the timer's expiry signal. The caller fires the buzzer.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` outside `Playing`; a cancelled
    /// timer's stale expiry therefore cannot corrupt a later phase.
    pub fn expire_round(&mut self) -> Result<(), GameError> {
        self.expect_phase(GamePhase::Playing)?;
        self.phase = GamePhase::Result;
        Ok(())
    }

    /// Record the referee's judgment and advance or finish.
    ///
    /// The score update lands before the advance-or-finish branch. On the
    /// last question the index stays put and the summary reads the completed
    /// count from the score.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` outside the `Result` phase.
    pub fn submit_result(&mut self, success: bool) -> Result<RoundOutcome, GameError> {
        self.expect_phase(GamePhase::Result)?;
        self.score.record(success);
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.phase = GamePhase::Ready;
            Ok(RoundOutcome::NextQuestion)
        } else {
            self.phase = GamePhase::Summary;
            Ok(RoundOutcome::Finished)
        }
    }

    /// Return to the start screen, clearing everything.
    ///
    /// Bumps the fetch epoch so an in-flight provider response is discarded
    /// on arrival. The caller cancels any live timer.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidPhase` when already on the start screen.
    pub fn reset(&mut self) -> Result<(), GameError> {
        if self.phase == GamePhase::Start {
            return Err(GameError::InvalidPhase { actual: self.phase });
        }
        self.phase = GamePhase::Start;
        self.selected_theme = None;
        self.questions.clear();
        self.current_index = 0;
        self.score = Score::new();
        self.loading = false;
        self.fetch_epoch = self.fetch_epoch.wrapping_add(1);
        Ok(())
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidPhase { actual: self.phase })
        }
    }
}
