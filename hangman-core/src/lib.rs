pub mod catalog;
pub mod clock;
pub mod coordinator;
pub mod game_events;
pub mod game_session;
pub mod leaderboard;
pub mod players;
pub mod progression;
pub mod session_store;
pub mod word;
pub mod word_session;

// Re-export main components
pub use catalog::*;
pub use clock::*;
pub use coordinator::*;
pub use game_events::*;
pub use game_session::*;
pub use leaderboard::*;
pub use players::*;
pub use progression::*;
pub use session_store::*;
pub use word::*;
pub use word_session::*;
