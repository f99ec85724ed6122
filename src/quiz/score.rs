// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-session tally, kept in memory only.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub started_at: DateTime<Utc>,
    pub correct: usize,
    pub revealed: usize,
    pub misses: usize,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    pub fn starting_at(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            correct: 0,
            revealed: 0,
            misses: 0,
        }
    }

    pub fn record_correct(&mut self) {
        self.correct += 1;
    }

    pub fn record_reveal(&mut self) {
        self.revealed += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn words_seen(&self) -> usize {
        self.correct + self.revealed
    }

    pub fn summary_at(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.started_at);
        let minutes = elapsed.num_minutes().max(0);
        let seconds = (elapsed.num_seconds() - minutes * 60).max(0);
        format!(
            "{} correct, {} revealed, {} wrong guesses in {}m{:02}s",
            self.correct, self.revealed, self.misses, minutes, seconds
        )
    }

    pub fn summary(&self) -> String {
        self.summary_at(Utc::now())
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn summary_counts_and_elapsed() {
        let start = Utc::now();
        let mut score = Scoreboard::starting_at(start);
        score.record_correct();
        score.record_correct();
        score.record_reveal();
        score.record_miss();
        assert_eq!(score.words_seen(), 3);
        assert_eq!(
            score.summary_at(start + Duration::seconds(125)),
            "2 correct, 1 revealed, 1 wrong guesses in 2m05s"
        );
    }
}
