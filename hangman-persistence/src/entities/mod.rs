pub mod completed_words;
pub mod players;
pub mod saved_sessions;

pub mod prelude {
    pub use super::completed_words::Entity as CompletedWords;
    pub use super::players::Entity as Players;
    pub use super::saved_sessions::Entity as SavedSessions;
}
