use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::Category;

pub type SessionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    Won,
    OutOfGuesses,
    TimedOut,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::Won => f.write_str("won"),
            GameOverReason::OutOfGuesses => f.write_str("out of guesses"),
            GameOverReason::TimedOut => f.write_str("timed out"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Running,
    Over(GameOverReason),
}

impl SessionStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, SessionStatus::Over(_))
    }

    pub fn reason(&self) -> Option<GameOverReason> {
        match self {
            SessionStatus::Running => None,
            SessionStatus::Over(reason) => Some(*reason),
        }
    }
}

/// Everything needed to rebuild a game session after a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub id: SessionId,
    pub word: String,
    pub category: Category,
    /// Lower-cased letters, sorted.
    pub guessed_letters: Vec<char>,
    pub incorrect_guesses: u32,
    pub solved: bool,
    pub remaining_guesses: u32,
    pub time_limit_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub saved_at: DateTime<Utc>,
}

/// What a single guess did, as reported back to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessReport {
    pub letter: char,
    pub outcome: GuessOutcome,
    pub masked_word: String,
    pub remaining_guesses: u32,
    pub status: SessionStatus,
    /// Change applied to the running word-session score, after clamping.
    pub score_delta: i32,
}
