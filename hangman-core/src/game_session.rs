use chrono::Utc;
use hangman_types::{
    GUESS_BUDGET, GameOverReason, GuessOutcome, SavedSession, SessionId, SessionStatus,
    TIME_LIMIT_SECONDS,
};
use tracing::info;
use uuid::Uuid;

use crate::{GameClock, Word};

/// One play-through of a single word: guess budget, time limit and the
/// decision of when (and why) it is over.
///
/// Once over, a session never runs again. Callers are expected to stop
/// feeding guesses into a finished session; a recorded outcome on a finished
/// session is ignored.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    word: Word,
    remaining_guesses: u32,
    time_limit_seconds: u64,
    clock: GameClock,
    finished: Option<GameOverReason>,
}

impl GameSession {
    /// Start a session with the standard budget. A `time_limit_seconds` of
    /// zero means unlimited time.
    pub fn new(word: Word, time_limit_seconds: u64) -> Self {
        let mut clock = GameClock::new();
        clock.start();
        Self {
            id: Uuid::new_v4(),
            word,
            remaining_guesses: GUESS_BUDGET,
            time_limit_seconds,
            clock,
            finished: None,
        }
    }

    /// Session with the standard 180 second limit.
    pub fn standard(word: Word) -> Self {
        Self::new(word, TIME_LIMIT_SECONDS)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn word_mut(&mut self) -> &mut Word {
        &mut self.word
    }

    pub fn remaining_guesses(&self) -> u32 {
        self.remaining_guesses
    }

    pub fn time_limit_seconds(&self) -> u64 {
        self.time_limit_seconds
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.clock.elapsed_seconds()
    }

    /// Restart the timer, clearing any previous end timestamp.
    pub fn start_timer(&mut self) {
        self.clock.start();
    }

    pub fn end_timer(&mut self) {
        self.clock.stop();
    }

    /// Resume a stopped timer, keeping the time already spent.
    pub fn resume_timer(&mut self) {
        self.clock.resume();
    }

    /// Spend one incorrect guess. No effect at zero or once the session is over.
    pub fn decrease_remaining_guesses(&mut self) {
        if self.finished.is_none() {
            self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
        }
    }

    pub fn is_game_won(&self) -> bool {
        self.word.is_solved()
    }

    fn evaluate(&self) -> Option<GameOverReason> {
        if self.is_game_won() {
            return Some(GameOverReason::Won);
        }
        if self.remaining_guesses == 0 {
            return Some(GameOverReason::OutOfGuesses);
        }
        if self.time_limit_seconds > 0 && self.elapsed_seconds() >= self.time_limit_seconds {
            return Some(GameOverReason::TimedOut);
        }
        None
    }

    /// Current status without changing anything. Checks, in order: word
    /// solved, guesses exhausted, time limit reached.
    pub fn status(&self) -> SessionStatus {
        match self.finished.or_else(|| self.evaluate()) {
            Some(reason) => SessionStatus::Over(reason),
            None => SessionStatus::Running,
        }
    }

    /// The reason this session ended, once it has been latched by `refresh`.
    pub fn end_reason(&self) -> Option<GameOverReason> {
        self.finished
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    /// Re-evaluate termination and, the first time it is reached, latch the
    /// reason and stop the timer.
    pub fn refresh(&mut self) -> SessionStatus {
        if self.finished.is_none() {
            if let Some(reason) = self.evaluate() {
                self.finished = Some(reason);
                self.clock.stop();
                info!(
                    "Session {} over ({}) after {}s with {} guesses left",
                    self.id,
                    reason,
                    self.elapsed_seconds(),
                    self.remaining_guesses
                );
            }
        }
        self.status()
    }

    /// Apply the effect of one guess outcome on the budget, then re-evaluate.
    pub fn record_outcome(&mut self, outcome: GuessOutcome) -> SessionStatus {
        if self.finished.is_some() {
            return self.status();
        }
        if outcome == GuessOutcome::Incorrect {
            self.decrease_remaining_guesses();
        }
        self.refresh()
    }

    pub fn snapshot(&self) -> SavedSession {
        SavedSession {
            id: self.id,
            word: self.word.text().to_string(),
            category: self.word.category(),
            guessed_letters: self.word.guessed_letters().iter().copied().collect(),
            incorrect_guesses: self.word.incorrect_guesses(),
            solved: self.word.is_solved(),
            remaining_guesses: self.remaining_guesses,
            time_limit_seconds: self.time_limit_seconds,
            started_at: self.clock.started_at().unwrap_or_else(Utc::now),
            ended_at: self.clock.ended_at(),
            saved_at: Utc::now(),
        }
    }

    /// Rebuild a session from a snapshot. The clock is restored as saved;
    /// callers decide whether to resume it.
    pub fn from_snapshot(saved: SavedSession) -> Self {
        let word = Word::restore(
            saved.word,
            saved.category,
            saved.guessed_letters,
            saved.incorrect_guesses,
            saved.solved,
        );
        let mut session = Self {
            id: saved.id,
            word,
            remaining_guesses: saved.remaining_guesses.min(GUESS_BUDGET),
            time_limit_seconds: saved.time_limit_seconds,
            clock: GameClock::restore(saved.started_at, saved.ended_at),
            finished: None,
        };
        session.finished = session.evaluate();
        session
    }
}
