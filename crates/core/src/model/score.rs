use serde::{Deserialize, Serialize};

/// Referee-judged tally for the running session.
///
/// `correct <= total` holds by construction: the only mutation is
/// `record`, which bumps `total` on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    correct: u32,
    total: u32,
}

impl Score {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one judged round.
    pub fn record(&mut self, success: bool) {
        self.total = self.total.saturating_add(1);
        if success {
            self.correct = self.correct.saturating_add(1);
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_successes_and_failures() {
        let mut score = Score::new();
        score.record(true);
        score.record(false);
        score.record(true);

        assert_eq!(score.correct(), 2);
        assert_eq!(score.total(), 3);
    }

    #[test]
    fn correct_never_exceeds_total() {
        let mut score = Score::new();
        for round in 0..50 {
            score.record(round % 3 == 0);
            assert!(score.correct() <= score.total());
        }
    }
}
