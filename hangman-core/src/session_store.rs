use hangman_types::{SavedSession, SessionId};

/// Where the coordinator parks saved sessions.
pub trait SessionStore {
    fn save(&mut self, session: SavedSession);

    /// The most recently saved session, if any.
    fn last(&self) -> Option<SavedSession>;

    /// Drop every saved copy of a session that has ended, so it cannot be
    /// resumed and played again.
    fn retire(&mut self, session_id: SessionId);
}

/// Keeps every saved session in memory, in save order.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    sessions: Vec<SavedSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, e.g. with sessions loaded from disk at startup.
    pub fn with_sessions(sessions: impl IntoIterator<Item = SavedSession>) -> Self {
        Self {
            sessions: sessions.into_iter().collect(),
        }
    }

    pub fn all(&self) -> &[SavedSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&mut self, session: SavedSession) {
        self.sessions.push(session);
    }

    fn last(&self) -> Option<SavedSession> {
        self.sessions.last().cloned()
    }

    fn retire(&mut self, session_id: SessionId) {
        self.sessions.retain(|saved| saved.id != session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hangman_types::Category;
    use uuid::Uuid;

    fn saved(id: SessionId, word: &str) -> SavedSession {
        let now = Utc::now();
        SavedSession {
            id,
            word: word.to_string(),
            category: Category::Animals,
            guessed_letters: Vec::new(),
            incorrect_guesses: 0,
            solved: false,
            remaining_guesses: 6,
            time_limit_seconds: 180,
            started_at: now,
            ended_at: Some(now),
            saved_at: now,
        }
    }

    #[test]
    fn test_retire_drops_every_copy_of_a_session() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let mut store = MemorySessionStore::with_sessions([
            saved(first, "cat"),
            saved(second, "dog"),
            saved(first, "cat"),
        ]);

        store.retire(first);
        assert_eq!(store.len(), 1);
        assert_eq!(store.last().unwrap().word, "dog");

        store.retire(second);
        assert!(store.last().is_none());
    }
}
