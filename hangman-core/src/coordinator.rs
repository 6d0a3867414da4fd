use hangman_types::{
    Category, GameError, GameOverReason, GuessReport, PlayerProfile, SessionId, SessionStatus,
};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::{
    GameEvent, GameEventBus, GameEventHandler, GameSession, ProgressionPolicy, SessionStore,
    WordSession,
};

/// Runs one game session at a time: starts sessions, routes guesses, and
/// saves or restores the current session through a session store.
///
/// The coordinator is the only owner of the current session. Starting a new
/// game drops the previous one unless it was saved first.
pub struct SessionCoordinator {
    word_session: WordSession,
    store: Box<dyn SessionStore>,
    current: Option<GameSession>,
    event_bus: GameEventBus,
}

impl SessionCoordinator {
    pub fn new(word_session: WordSession, store: Box<dyn SessionStore>) -> Self {
        Self {
            word_session,
            store,
            current: None,
            event_bus: GameEventBus::new(),
        }
    }

    pub fn add_event_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    pub fn current_session(&self) -> Option<&GameSession> {
        self.current.as_ref()
    }

    pub fn word_session(&self) -> &WordSession {
        &self.word_session
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// Masked form of the current word, if a session exists.
    pub fn masked_word(&self) -> Option<String> {
        self.current
            .as_ref()
            .map(|session| self.word_session.masked_word(session.word()))
    }

    /// Running score of the word session across all games.
    pub fn score(&self) -> u32 {
        self.word_session.score()
    }

    /// Start a session on an unused word of `category_name`, skipping the
    /// words in `exclude`. Category names are matched case-sensitively; an
    /// unknown name has no words and yields `NoWordAvailable`.
    ///
    /// On error the current session, if any, is left as it was.
    pub fn start_new_game(
        &mut self,
        category_name: &str,
        exclude: &BTreeSet<String>,
    ) -> Result<&GameSession, GameError> {
        let category = Category::from_name(category_name);
        let word = self.word_session.start_new_game(category, exclude)?;
        let session = GameSession::standard(word);

        info!(
            "Started session {} in {} with a {}-letter word",
            session.id(),
            category,
            session.word().text().chars().count()
        );
        self.event_bus.publish(GameEvent::SessionStarted {
            session_id: session.id(),
            category,
            word_length: session.word().text().chars().count(),
        });

        Ok(self.current.insert(session))
    }

    /// Start a session for `profile`, excluding the words it already completed
    /// in that category.
    pub fn start_new_game_for(
        &mut self,
        profile: &PlayerProfile,
        category_name: &str,
    ) -> Result<&GameSession, GameError> {
        let category = Category::from_name(category_name);
        let none = BTreeSet::new();
        let exclude = profile.completed_words().words(category).unwrap_or(&none);
        self.start_new_game(category_name, exclude)
    }

    /// Bring the current session's status up to date. The first time the
    /// session is seen over, its end is recorded.
    fn refresh_current(&mut self) -> Result<SessionStatus, GameError> {
        let session = self.current.as_mut().ok_or(GameError::NoActiveSession)?;
        let already_over = session.end_reason().is_some();
        let status = session.refresh();
        if let SessionStatus::Over(reason) = status {
            if !already_over {
                self.finish_current(reason);
            }
        }
        Ok(status)
    }

    /// End-of-game bookkeeping for the current session: a won word becomes
    /// used, saved copies are retired, and `SessionEnded` is published.
    fn finish_current(&mut self, reason: GameOverReason) {
        let Some(session) = self.current.as_ref() else {
            return;
        };
        if reason == GameOverReason::Won {
            self.word_session.mark_used(session.word());
        }
        self.store.retire(session.id());
        self.event_bus.publish(GameEvent::SessionEnded {
            session_id: session.id(),
            reason,
            word: session.word().text().to_string(),
            elapsed_seconds: session.elapsed_seconds(),
        });
    }

    /// Guess a letter in the current session.
    ///
    /// Incorrect guesses spend one unit of the budget. Winning marks the word
    /// as used so it is not picked again. A session whose time ran out since
    /// the last guess ends here and the guess is rejected.
    pub fn make_guess(&mut self, letter: char) -> Result<GuessReport, GameError> {
        if let SessionStatus::Over(reason) = self.refresh_current()? {
            return Err(GameError::SessionOver { reason });
        }
        if !letter.is_alphabetic() {
            return Err(GameError::InvalidLetter { letter });
        }

        let session = self.current.as_mut().ok_or(GameError::NoActiveSession)?;
        let score_before = self.word_session.score();
        let outcome = self.word_session.make_guess(session.word_mut(), letter);
        let status = session.record_outcome(outcome);
        let score_delta = self.word_session.score() as i64 - score_before as i64;

        debug!(
            "Session {}: guessed '{}' -> {:?}, {} guesses left",
            session.id(),
            letter,
            outcome,
            session.remaining_guesses()
        );
        self.event_bus.publish(GameEvent::LetterGuessed {
            session_id: session.id(),
            letter,
            outcome,
            remaining_guesses: session.remaining_guesses(),
        });

        let report = GuessReport {
            letter,
            outcome,
            masked_word: session.word().masked(),
            remaining_guesses: session.remaining_guesses(),
            status,
            score_delta: score_delta as i32,
        };

        if let SessionStatus::Over(reason) = status {
            self.finish_current(reason);
        }
        Ok(report)
    }

    /// Guess a letter and carry the result over to `profile`: score change,
    /// completed word and level on a win, and the last game time once over.
    ///
    /// The last game time is also recorded when the guess is rejected
    /// because the session is over, so a timeout is never lost.
    pub fn make_guess_for(
        &mut self,
        profile: &mut PlayerProfile,
        letter: char,
    ) -> Result<GuessReport, GameError> {
        let report = match self.make_guess(letter) {
            Ok(report) => report,
            Err(GameError::SessionOver { reason }) => {
                if let Some(session) = self.current.as_ref() {
                    profile.set_last_game_seconds(session.elapsed_seconds());
                }
                return Err(GameError::SessionOver { reason });
            }
            Err(e) => return Err(e),
        };
        ProgressionPolicy::apply_outcome(profile, report.outcome);

        if let SessionStatus::Over(reason) = report.status {
            if let Some(session) = self.current.as_ref() {
                if reason == GameOverReason::Won {
                    ProgressionPolicy::record_win(profile, session.word());
                }
                profile.set_last_game_seconds(session.elapsed_seconds());
            }
        }
        Ok(report)
    }

    /// Save the current session. Only a running session can be saved; the
    /// stored copy has its timer stopped at the moment of saving.
    pub fn save_current_game(&mut self) -> Result<SessionId, GameError> {
        if let SessionStatus::Over(reason) = self.refresh_current()? {
            return Err(GameError::SessionOver { reason });
        }
        let session = self.current.as_ref().ok_or(GameError::NoActiveSession)?;

        let mut snapshot = session.snapshot();
        if snapshot.ended_at.is_none() {
            snapshot.ended_at = Some(snapshot.saved_at);
        }
        let session_id = snapshot.id;
        self.store.save(snapshot);

        info!("Saved session {}", session_id);
        self.event_bus.publish(GameEvent::SessionSaved { session_id });
        Ok(session_id)
    }

    /// Make the most recently saved session current. A session that was still
    /// running resumes its timer where it stopped; one that turns out to be
    /// over is ended right away.
    ///
    /// Returns `None` when nothing was saved, or when the saved word has
    /// already been won in this session, leaving the current session in place.
    pub fn load_last_game(&mut self) -> Option<&GameSession> {
        let saved = self.store.last()?;
        if self.word_session.is_used(&saved.word) {
            warn!("Discarding saved session {}: its word was already won", saved.id);
            self.store.retire(saved.id);
            return None;
        }

        let mut session = GameSession::from_snapshot(saved);
        let ended = session.end_reason();
        if ended.is_none() {
            session.resume_timer();
        }

        info!(
            "Restored session {} ({} elapsed, {} guesses left)",
            session.id(),
            session.elapsed_seconds(),
            session.remaining_guesses()
        );
        self.event_bus.publish(GameEvent::SessionRestored {
            session_id: session.id(),
        });
        self.current = Some(session);

        if let Some(reason) = ended {
            self.finish_current(reason);
        }
        self.current.as_ref()
    }

    /// Drop the current session without saving it.
    pub fn abandon_current(&mut self) -> Option<GameSession> {
        self.current.take()
    }
}
