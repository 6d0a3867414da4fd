use hangman_types::{Category, GameOverReason, GuessOutcome, SessionId};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SessionStarted {
        session_id: SessionId,
        category: Category,
        word_length: usize,
    },
    LetterGuessed {
        session_id: SessionId,
        letter: char,
        outcome: GuessOutcome,
        remaining_guesses: u32,
    },
    SessionEnded {
        session_id: SessionId,
        reason: GameOverReason,
        word: String,
        elapsed_seconds: u64,
    },
    SessionSaved {
        session_id: SessionId,
    },
    SessionRestored {
        session_id: SessionId,
    },
}

impl GameEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            GameEvent::SessionStarted { session_id, .. }
            | GameEvent::LetterGuessed { session_id, .. }
            | GameEvent::SessionEnded { session_id, .. }
            | GameEvent::SessionSaved { session_id }
            | GameEvent::SessionRestored { session_id } => *session_id,
        }
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler {
    fn handle_event(&mut self, event: GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}
